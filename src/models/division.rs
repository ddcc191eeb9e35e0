//! Division labels: tier parsing for the standard championship and group structures for Paris.

use serde::{Deserialize, Serialize};

/// Number of players in one Paris group unless configured otherwise.
pub const PARIS_GROUP_SIZE: usize = 3;

/// Level of a standard-championship division, strongest first.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tier", content = "level", rename_all = "camelCase")]
pub enum DivisionTier {
    Nationale(u8),
    PreNationale,
    Regionale(u8),
    PreRegionale,
    Departementale(u8),
    Other,
}

impl DivisionTier {
    /// Parse a raw division label ("Nationale 2", "FED_N2 Poule A", "Pré-Nationale", "R1", "D3" ...).
    pub fn parse(label: &str) -> Self {
        let tokens = normalized_tokens(label);
        let tokens: Vec<&str> = tokens
            .iter()
            .map(|t| {
                let t = t.as_str();
                t.strip_prefix("fed").filter(|r| !r.is_empty()).unwrap_or(t)
            })
            .filter(|t| *t != "fed")
            .collect();

        for (i, token) in tokens.iter().enumerate() {
            let next_level = tokens.get(i + 1).and_then(|t| t.parse::<u8>().ok());
            match *token {
                "pn" | "prenationale" => return DivisionTier::PreNationale,
                "pre" if tokens.get(i + 1).is_some_and(|t| t.starts_with("nation")) => {
                    return DivisionTier::PreNationale
                }
                "pr" | "preregionale" => return DivisionTier::PreRegionale,
                "pre" if tokens.get(i + 1).is_some_and(|t| t.starts_with("region")) => {
                    return DivisionTier::PreRegionale
                }
                "nationale" | "national" => {
                    if let Some(level) = next_level {
                        return DivisionTier::Nationale(level);
                    }
                }
                "regionale" | "regional" => {
                    if let Some(level) = next_level {
                        return DivisionTier::Regionale(level);
                    }
                }
                "departementale" | "departemental" => {
                    if let Some(level) = next_level {
                        return DivisionTier::Departementale(level);
                    }
                }
                _ => {}
            }
            if let Some(tier) = short_code(token) {
                return tier;
            }
        }
        DivisionTier::Other
    }
}

impl std::fmt::Display for DivisionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DivisionTier::Nationale(n) => write!(f, "Nationale {}", n),
            DivisionTier::PreNationale => write!(f, "Pré-Nationale"),
            DivisionTier::Regionale(n) => write!(f, "Régionale {}", n),
            DivisionTier::PreRegionale => write!(f, "Pré-Régionale"),
            DivisionTier::Departementale(n) => write!(f, "Départementale {}", n),
            DivisionTier::Other => write!(f, "division non reconnue"),
        }
    }
}

/// "n2", "r1", "d3" style codes.
fn short_code(token: &str) -> Option<DivisionTier> {
    let mut chars = token.chars();
    let prefix = chars.next()?;
    let level: u8 = chars.as_str().parse().ok()?;
    match prefix {
        'n' => Some(DivisionTier::Nationale(level)),
        'r' => Some(DivisionTier::Regionale(level)),
        'd' => Some(DivisionTier::Departementale(level)),
        _ => None,
    }
}

/// Lowercase, accent-free, alphanumeric tokens of a label.
fn normalized_tokens(label: &str) -> Vec<String> {
    let folded: String = label
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'à' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'î' | 'ï' => 'i',
            'ô' | 'ö' => 'o',
            'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            c if c.is_ascii_alphanumeric() => c,
            _ => ' ',
        })
        .collect();
    folded.split_whitespace().map(str::to_string).collect()
}

/// Divisions of the Paris championship, strongest first.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParisDivision {
    Excellence,
    PromotionExcellence,
    Honneur,
    Division1,
    Division2,
}

impl ParisDivision {
    pub fn parse(label: &str) -> Option<Self> {
        let tokens = normalized_tokens(label);
        let has = |word: &str| tokens.iter().any(|t| t == word);
        if has("promotion") && has("excellence") {
            return Some(ParisDivision::PromotionExcellence);
        }
        if has("excellence") {
            return Some(ParisDivision::Excellence);
        }
        if has("honneur") {
            return Some(ParisDivision::Honneur);
        }
        let level = tokens
            .iter()
            .position(|t| t == "division")
            .and_then(|i| tokens.get(i + 1))
            .and_then(|t| t.parse::<u8>().ok());
        match level {
            Some(1) => Some(ParisDivision::Division1),
            Some(2) => Some(ParisDivision::Division2),
            _ => None,
        }
    }

    pub fn groups(&self) -> usize {
        match self {
            ParisDivision::Excellence | ParisDivision::PromotionExcellence | ParisDivision::Honneur => 3,
            ParisDivision::Division1 => 2,
            ParisDivision::Division2 => 1,
        }
    }
}

/// Shape of a Paris team: how many groups of how many players.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParisGroupStructure {
    pub division: ParisDivision,
    pub groups: usize,
    pub group_size: usize,
    pub total_players: usize,
}

/// Resolve a Paris division label with the canonical group size of 3.
pub fn resolve_paris_structure(label: &str) -> Option<ParisGroupStructure> {
    resolve_paris_structure_with(label, PARIS_GROUP_SIZE)
}

/// Resolve a Paris division label with an explicit group size. Unknown labels yield `None`.
pub fn resolve_paris_structure_with(label: &str, group_size: usize) -> Option<ParisGroupStructure> {
    let division = ParisDivision::parse(label)?;
    let groups = division.groups();
    Some(ParisGroupStructure {
        division,
        groups,
        group_size,
        total_players: groups * group_size,
    })
}

/// Zero-based group index of a roster slot.
pub fn group_of_slot(slot: usize, group_size: usize) -> usize {
    slot / group_size.max(1)
}
