use crate::error::AtlasError;
use csv::{ReaderBuilder, Trim};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Embedded CSV of the 50 states: `name,code`.
pub static STATES_CSV: &str = include_str!("../../fixtures/states.csv");

/// Embedded CSV of average yearly rainfall per state: `state,inches`.
pub static RAINFALL_CSV: &str = include_str!("../../fixtures/rainfall.csv");

/// Number of entries a valid state table holds.
pub const STATE_COUNT: usize = 50;

static EMBEDDED: LazyLock<StateAtlas> = LazyLock::new(|| {
    match StateAtlas::from_csv(STATES_CSV, RAINFALL_CSV) {
        Ok(atlas) => atlas,
        Err(e) => panic!("embedded state fixtures are invalid: {}", e),
    }
});

/// One row of the state table.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct UsState {
    /// Canonical lowercase name (e.g. "new york")
    pub name: String,
    /// Two-letter uppercase postal code (e.g. "NY")
    pub code: String,
}

#[derive(Debug, Deserialize)]
struct RainfallRow {
    state: String,
    inches: f64,
}

/// The immutable state and rainfall tables, indexed both ways.
///
/// Built once from CSV and never mutated. Besides the ordered state list it
/// keeps a name index, a code index and the rainfall map, so every lookup is
/// a single hash probe.
#[derive(Debug, Clone)]
pub struct StateAtlas {
    states: Vec<UsState>,
    by_name: HashMap<String, usize>,
    by_code: HashMap<String, usize>,
    rainfall: HashMap<String, f64>,
}

fn is_postal_code(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase())
}

fn reader(csv_object: &str) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(csv_object.as_bytes())
}

impl StateAtlas {
    /// The atlas parsed from the embedded fixtures.
    ///
    /// Parsed on first use; panics if the embedded fixtures are invalid.
    pub fn embedded() -> &'static StateAtlas {
        &EMBEDDED
    }

    /// Parse and validate a state table and a rainfall table.
    ///
    /// Names and rainfall keys are folded to lowercase. The rainfall key set
    /// must match the state names exactly.
    pub fn from_csv(states_csv: &str, rainfall_csv: &str) -> Result<StateAtlas, AtlasError> {
        let mut states: Vec<UsState> = Vec::with_capacity(STATE_COUNT);
        let mut by_name = HashMap::with_capacity(STATE_COUNT);
        let mut by_code = HashMap::with_capacity(STATE_COUNT);

        for row in reader(states_csv).deserialize() {
            let row: UsState = row?;
            let name = row.name.to_lowercase();
            if !is_postal_code(&row.code) {
                return Err(AtlasError::BadCode {
                    name,
                    code: row.code,
                });
            }
            let idx = states.len();
            if by_name.insert(name.clone(), idx).is_some() {
                return Err(AtlasError::DuplicateName(name));
            }
            if by_code.insert(row.code.clone(), idx).is_some() {
                return Err(AtlasError::DuplicateCode(row.code));
            }
            states.push(UsState {
                name,
                code: row.code,
            });
        }

        if states.len() != STATE_COUNT {
            return Err(AtlasError::WrongCount {
                expected: STATE_COUNT,
                found: states.len(),
            });
        }

        let mut rainfall = HashMap::with_capacity(STATE_COUNT);
        for row in reader(rainfall_csv).deserialize() {
            let row: RainfallRow = row?;
            let state = row.state.to_lowercase();
            if !row.inches.is_finite() || row.inches <= 0.0 {
                return Err(AtlasError::BadRainfall {
                    state,
                    inches: row.inches,
                });
            }
            if !by_name.contains_key(&state) {
                return Err(AtlasError::UnknownRainfall(state));
            }
            if rainfall.insert(state.clone(), row.inches).is_some() {
                return Err(AtlasError::DuplicateRainfall(state));
            }
        }

        if let Some(missing) = states.iter().find(|s| !rainfall.contains_key(&s.name)) {
            return Err(AtlasError::MissingRainfall(missing.name.clone()));
        }

        debug!("loaded {} states with rainfall", states.len());
        Ok(StateAtlas {
            states,
            by_name,
            by_code,
            rainfall,
        })
    }

    /// All states in table order.
    pub fn states(&self) -> &[UsState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Entry whose canonical name is exactly `name`.
    pub(crate) fn by_name(&self, name: &str) -> Option<&UsState> {
        self.by_name.get(name).map(|&i| &self.states[i])
    }

    /// Entry whose code is exactly `code`.
    pub(crate) fn by_code(&self, code: &str) -> Option<&UsState> {
        self.by_code.get(code).map(|&i| &self.states[i])
    }

    /// Rainfall keyed by an already lowercased name.
    pub(crate) fn rainfall_for(&self, name: &str) -> Option<f64> {
        self.rainfall.get(name).copied()
    }
}
