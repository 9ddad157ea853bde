use anyhow::{anyhow, Result};
use rand::{rngs::StdRng, rngs::SysRng, SeedableRng, TryRng};

/// Seed a fresh generator from the operating system
pub fn make_rng() -> Result<StdRng> {
    let seed = SysRng::try_next_u64(&mut SysRng)
        .map_err(|err| anyhow!("failed to seed random number generator: {}", err))?;

    Ok(StdRng::seed_from_u64(seed))
}
