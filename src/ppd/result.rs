/// Convenience type so fallible functions can propagate any module's error with `?`
pub type Result<T = ()> = anyhow::Result<T>;
