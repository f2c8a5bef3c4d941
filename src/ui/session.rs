/// Run `body` on whatever `setup` produced, then `restore`.
///
/// `restore` runs whenever `setup` was attempted, including when setup fails
/// partway (alternate screen entered but the terminal could not be created).
/// The first error wins: setup, then body, then restore.
pub fn run_session<T>(
    setup: impl FnOnce() -> anyhow::Result<T>,
    body: impl FnOnce(T) -> anyhow::Result<()>,
    restore: impl FnOnce() -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    let result = setup().and_then(body);
    let restored = restore();
    result?;
    restored
}
