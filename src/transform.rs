use crate::constants::{
    DESCRIPTION_PLACEHOLDER, ELEMENTAL_EVIL, MATERIALS_PLACEHOLDER, PLAYERS_HANDBOOK,
};
use crate::types::{DonjonSpell, MaterialComponent, TomeComponents, TomeSource, TomeSpell};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

// Single newline with non-newline neighbors on both sides.
static SINGLE_NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^\n])\n([^\n])").unwrap());
// Spaces hugging a newline.
static NEWLINE_PADDING: Lazy<Regex> = Lazy::new(|| Regex::new(r" *\n *").unwrap());
// A run of spaces. Only the first match gets collapsed, matching the original
// converter's non-global replace.
static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").unwrap());

/// Converts a Donjon API spell record to a Tome spell. This largely involves
/// changing names, converting string values to numbers/bools, and leaving out
/// fields Tome doesn't need.
///
/// Never fails: malformed fields degrade to defaults with a warning logged,
/// so one bad record can't take down a whole batch.
pub fn donjon_to_tome(raw: &DonjonSpell) -> TomeSpell {
    let name = raw.name.clone();

    let spell = TomeSpell {
        source: parse_source(&raw.source, &name),
        level: parse_level(&raw.level),
        school: raw.school.to_lowercase(),
        ritual: raw.ritual == "yes",
        classes: raw.class.iter().map(|c| c.to_lowercase()).collect(),
        casting_time: raw.casting_time.to_lowercase(),
        range: raw.range.to_lowercase(),
        duration: raw.duration.to_lowercase(),
        concentration: raw.concentration == "yes",
        components: parse_components(&raw.components),
        description: normalize_description(raw.description.as_deref(), &name),
        name,
    };

    info!("Successfully parsed {}", spell.name);
    spell
}

/// Level: "Cantrip" or "1st", "2nd", ..., "9th" to a number 0-9. Anything
/// without a leading digit is a cantrip.
fn parse_level(raw: &str) -> u8 {
    raw.chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .map(|d| d as u8)
        .unwrap_or(0)
}

/// Source: "phb <num>" or "ee <num>" to a long-form name and page number.
/// "phb" takes priority when both codes appear. Other supplement codes are
/// nonstandard and map to an empty source.
fn parse_source(raw: &str, spell_name: &str) -> TomeSource {
    if raw.contains("phb") {
        TomeSource {
            name: PLAYERS_HANDBOOK.to_string(),
            page: parse_page(raw.get(4..).unwrap_or(""), spell_name),
        }
    } else if raw.contains("ee") {
        TomeSource {
            name: ELEMENTAL_EVIL.to_string(),
            page: parse_page(raw.get(3..).unwrap_or(""), spell_name),
        }
    } else {
        warn!("Spell {} has nonstandard source {}", spell_name, raw);
        TomeSource {
            name: String::new(),
            page: 0,
        }
    }
}

/// Leading-integer parse in the style of parseInt: skip leading whitespace,
/// read the digit run, ignore the rest.
fn parse_page(raw: &str, spell_name: &str) -> u32 {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    match digits.parse() {
        Ok(page) => page,
        Err(_) => {
            warn!("Spell {} has source without a page number", spell_name);
            0
        }
    }
}

/// Components: Donjon packs these into a code string like "V,S,M".
///
/// The `> 0` index checks mirror the original converter, which skipped a code
/// letter sitting at position zero.
fn parse_components(raw: &str) -> TomeComponents {
    let has_material = raw.find('M').is_some_and(|i| i > 0);
    TomeComponents {
        verbal: raw.find('V').is_some_and(|i| i > 0),
        somatic: raw.find('S').is_some_and(|i| i > 0),
        material: MaterialComponent {
            has: has_material,
            items: if has_material {
                MATERIALS_PLACEHOLDER.to_string()
            } else {
                String::new()
            },
        },
    }
}

/// Description: reduce whitespace clusters to a single space, but keep "\n\n"
/// paragraph breaks in place.
fn normalize_description(raw: Option<&str>, spell_name: &str) -> String {
    let Some(raw) = raw else {
        warn!("Could not get description for {}", spell_name);
        return DESCRIPTION_PLACEHOLDER.to_string();
    };

    // Replace single newlines with spaces.
    let desc = SINGLE_NEWLINE.replace_all(raw, "$1 $2");
    // Remove any spaces before or after newlines.
    let desc = NEWLINE_PADDING.replace_all(&desc, "\n");
    // Remove any remaining multiple spaces. First run only, as the original
    // converter's replace was not global.
    SPACE_RUN.replace(&desc, " ").into_owned()
}
