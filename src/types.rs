use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Raw spell data as returned by the Donjon 5e API.
///
/// Donjon stores every value as a string (Class is a list of strings), so the
/// numeric/boolean conversions all happen in the transformer. Description is
/// missing entirely for some spells; the remaining fields default to empty
/// rather than failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DonjonSpell {
    pub name: String,
    pub level: String,
    pub source: String,
    pub school: String,
    pub ritual: String,
    pub class: Vec<String>,
    #[serde(rename = "Casting Time")]
    pub casting_time: String,
    pub range: String,
    pub duration: String,
    pub concentration: String,
    pub components: String,
    pub description: Option<String>,
}

/// Source book reference: long-form name plus page number.
///
/// `name` is empty and `page` is 0 when the Donjon source code is not one we
/// recognize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TomeSource {
    pub name: String,
    pub page: u32,
}

/// Material component info. Donjon only marks spells with an `M` code; the
/// actual item list is never available, so `items` is a placeholder whenever
/// `has` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialComponent {
    pub has: bool,
    pub items: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TomeComponents {
    pub verbal: bool,
    pub somatic: bool,
    pub material: MaterialComponent,
}

/// Normalized spell in the Tome schema.
///
/// Field order here is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TomeSpell {
    pub source: TomeSource,
    pub name: String,
    pub level: u8,
    pub school: String,
    pub ritual: bool,
    pub classes: Vec<String>,
    pub casting_time: String,
    pub range: String,
    pub duration: String,
    pub concentration: bool,
    pub components: TomeComponents,
    pub description: String,
}

/// Core trait for spell lookup sources.
#[async_trait::async_trait]
pub trait SpellApi: Send + Sync {
    /// Unique identifier for this API
    fn api_name(&self) -> &'static str;

    /// Fetch the raw record for a single spell by name
    async fn get_spell(&self, name: &str) -> Result<DonjonSpell>;
}
