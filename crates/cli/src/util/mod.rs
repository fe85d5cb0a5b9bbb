use pointerpos_runtime::PlatformQueryError;

pub type CliResult<T> = anyhow::Result<T>;

pub fn map_query_error(err: PlatformQueryError) -> anyhow::Error {
    anyhow::Error::new(err)
}
