/// Convenience alias for infrastructure paths where the precise error kind
/// no longer matters to the caller.
pub type Result<T = ()> = anyhow::Result<T>;
