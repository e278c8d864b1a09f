//! Environment-driven mapper loading inside a `figment::Jail`.

use anyhow::{Result, anyhow};
use figment::Jail;
use mason::Mapper;

/// Load a [`Mapper`] with `vars` set as environment variables.
///
/// The variables only exist for the duration of the jail; the process
/// environment is restored before this returns.
///
/// # Errors
///
/// Returns an error when the jail cannot be created or [`Mapper::load`]
/// rejects the environment.
pub fn load_mapper(vars: &[(&str, &str)]) -> Result<Mapper> {
    let mut loaded = None;
    Jail::try_with(|jail| {
        for (key, value) in vars {
            jail.set_env(key, value);
        }
        let mapper = Mapper::load().map_err(|err| figment::Error::from(err.to_string()))?;
        loaded = Some(mapper);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    loaded.ok_or_else(|| anyhow!("jail closure did not load a mapper"))
}
