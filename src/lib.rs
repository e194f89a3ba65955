pub mod cards;
pub mod dto;
pub mod engine;
pub mod odds;

/// completion likelihoods and equity scalars
pub type Probability = f64;
/// blinds and bet amounts
pub type Chips = u32;

/// Random instance generation for tests and sampling.
pub trait Arbitrary {
    fn random() -> Self;
}

/// terminal logger for binaries. the library itself only emits
/// through the log facade and never initializes anything.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
