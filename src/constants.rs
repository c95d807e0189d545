/// Endpoint and placeholder constants shared across the codebase

// User-friendly API name (used in logs)
pub const DONJON_API: &str = "donjon";

/// Donjon 5e spell lookup endpoint; spell name goes in the `name` query param
pub const DONJON_SPELL_ENDPOINT: &str = "http://donjon.bin.sh/5e/spells/rpc.cgi";

/// Environment variable that overrides the endpoint (tests, mirrors)
pub const DONJON_ENDPOINT_ENV: &str = "DONJON_BASE_URL";

// Long-form source book names for the short codes Donjon uses
pub const PLAYERS_HANDBOOK: &str = "player's handbook";
pub const ELEMENTAL_EVIL: &str = "elemental evil";

// Donjon never supplies a description for some spells, and never supplies
// material component lists at all. These markers go in the output instead.
pub const DESCRIPTION_PLACEHOLDER: &str = "TODO Description was unavailable";
pub const MATERIALS_PLACEHOLDER: &str = "TODO: ITEMS NOT AVAILABLE";
