use classical_engine::ClassicalEngine;
use othello_core::Engine;
use random_engine::RandomEngine;

pub const ENGINE_NAMES: &[&str] = &["classical", "random", "random:SEED"];

/// Builds an engine from a name such as `classical` or `random:42`.
///
/// A bare `random` uses `default_seed` when one is given.
pub fn create_engine(spec: &str, default_seed: Option<u64>) -> Option<Box<dyn Engine>> {
    let (name, arg) = match spec.split_once(':') {
        Some((name, arg)) => (name, Some(arg)),
        None => (spec, None),
    };

    match (name.to_lowercase().as_str(), arg) {
        ("classical" | "classic", None) => Some(Box::new(ClassicalEngine::new())),
        ("random" | "rand", None) => Some(Box::new(match default_seed {
            Some(seed) => RandomEngine::with_seed(seed),
            None => RandomEngine::new(),
        })),
        ("random" | "rand", Some(seed)) => {
            let seed = seed.parse().ok()?;
            Some(Box::new(RandomEngine::with_seed(seed)))
        }
        _ => None,
    }
}
