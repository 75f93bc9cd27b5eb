use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber shared by every binary.
///
/// `RUST_LOG` wins when set; otherwise `info`, with lofty's parser chatter
/// limited to errors.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,lofty=error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
