// json log lines on stdout; the hosting page or process decides where they go
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .json()
        .try_init();
}

#[cfg(test)]
mod tests {
    use crate::utils::logs::setup_tracing;

    #[test]
    fn test_should_setup_tracing_twice() {
        setup_tracing();
        setup_tracing();
        tracing::info!(books = 0, "tracing ready");
    }
}
