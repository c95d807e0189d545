use crate::error::Result;
use crate::transform::donjon_to_tome;
use crate::types::{SpellApi, TomeSpell};
use serde::Serialize;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{error, info, instrument};

/// Result of a complete fetch run
#[derive(Debug, Serialize)]
pub struct PipelineResult {
    pub spells: Vec<TomeSpell>,
    pub total: usize,
    pub fetched: usize,
    pub errors: Vec<String>,
}

/// Extract spell names from the input file contents: a JSON object whose keys
/// are spell names. The values are unused.
pub fn spell_names_from_json(contents: &str) -> Result<Vec<String>> {
    let spells: serde_json::Map<String, serde_json::Value> = serde_json::from_str(contents)?;
    Ok(spells.keys().cloned().collect())
}

/// Serialize spells as the Tome JSON array, pretty-printed with the
/// single-space indentation Tome expects.
pub fn to_tome_json(spells: &[TomeSpell]) -> Result<String> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    spells.serialize(&mut ser)?;
    // The serializer only ever writes UTF-8.
    Ok(String::from_utf8(buf).expect("serialized JSON was not UTF-8"))
}

/// Fetch and convert every named spell concurrently.
///
/// One task per name goes into a [`JoinSet`]; draining the set is what
/// guarantees the run completes exactly once, after every fetch has resolved.
/// A failed fetch is logged and counted in `errors` without aborting the
/// batch, so a partial result set still comes back. Spells land in completion
/// order; callers get no ordering guarantee.
#[instrument(skip(api, names), fields(api_name = %api.api_name(), count = names.len()))]
pub async fn fetch_all(api: Arc<dyn SpellApi>, names: &[String]) -> PipelineResult {
    let total = names.len();
    let mut tasks = JoinSet::new();

    for name in names {
        let api = api.clone();
        let name = name.clone();
        tasks.spawn(async move {
            match api.get_spell(&name).await {
                Ok(raw) => Ok(donjon_to_tome(&raw)),
                Err(e) => Err((name, e)),
            }
        });
    }

    let mut spells = Vec::with_capacity(total);
    let mut errors = Vec::new();

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(spell)) => spells.push(spell),
            Ok(Err((name, e))) => {
                error!("Could not fetch spell {}: {}", name, e);
                errors.push(format!("{name}: {e}"));
            }
            Err(e) => {
                // A panicked or cancelled task still counts as a completion.
                error!("Spell fetch task did not complete: {}", e);
                errors.push(format!("task failure: {e}"));
            }
        }
    }

    let fetched = spells.len();
    info!("Fetched {} of {} spells", fetched, total);

    PipelineResult {
        spells,
        total,
        fetched,
        errors,
    }
}
