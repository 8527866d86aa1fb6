use super::Error;

pub const DEFAULT_ELEMENTS: usize = 10;
/// Heap contents are printed around `heapify` only below this many elements
pub const DEFAULT_PRINT_THRESHOLD: usize = 11;

///////////////////////////////
/// Which heap variants to run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeapSelection {
    Max,
    Min,
    Both,
}

impl HeapSelection {
    /// "max" or "min"; anything else selects both
    pub fn from_word(word: &str) -> Self {
        match word {
            "max" => HeapSelection::Max,
            "min" => HeapSelection::Min,
            _ => HeapSelection::Both,
        }
    }

    pub fn includes_max(&self) -> bool {
        matches!(self, HeapSelection::Max | HeapSelection::Both)
    }

    pub fn includes_min(&self) -> bool {
        matches!(self, HeapSelection::Min | HeapSelection::Both)
    }
}

///////////////////////////////
/// Which construction methods to time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MethodSelection {
    SiftUp,
    SiftDown,
    Both,
}

impl MethodSelection {
    /// "su" or "sd"; anything else selects both
    pub fn from_word(word: &str) -> Self {
        match word {
            "su" => MethodSelection::SiftUp,
            "sd" => MethodSelection::SiftDown,
            _ => MethodSelection::Both,
        }
    }

    pub fn includes_sift_up(&self) -> bool {
        matches!(self, MethodSelection::SiftUp | MethodSelection::Both)
    }

    pub fn includes_sift_down(&self) -> bool {
        matches!(self, MethodSelection::SiftDown | MethodSelection::Both)
    }
}

///////////////////////////////
/// Options for one run, passed to the command explicitly
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub heap: HeapSelection,
    pub method: MethodSelection,
    pub elements: usize,
    pub print_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            heap: HeapSelection::Both,
            method: MethodSelection::Both,
            elements: DEFAULT_ELEMENTS,
            print_threshold: DEFAULT_PRINT_THRESHOLD,
        }
    }
}

impl Config {
    /// Interpret the positional words by count:
    /// `[]`, `[n]`, `[heaptype, n]` or `[heaptype, method, n]`.
    /// Any other count runs with the defaults.
    pub fn from_args<S: AsRef<str>>(words: &[S]) -> Result<Self, Error> {
        let mut config = Config::default();

        match words {
            [] => {}
            [elements] => {
                config.elements = parse_elements(elements.as_ref())?;
            }
            [heap, elements] => {
                config.heap = HeapSelection::from_word(heap.as_ref());
                config.elements = parse_elements(elements.as_ref())?;
            }
            [heap, method, elements] => {
                config.heap = HeapSelection::from_word(heap.as_ref());
                config.method = MethodSelection::from_word(method.as_ref());
                config.elements = parse_elements(elements.as_ref())?;
            }
            _ => {
                log::warn!(
                    "Expected at most 3 arguments but got {}, running with defaults",
                    words.len()
                );
            }
        }

        Ok(config)
    }

    #[inline]
    pub fn prints_contents(&self) -> bool {
        self.elements < self.print_threshold
    }
}

/// Element count from the last positional word. Negative counts build nothing
fn parse_elements(word: &str) -> Result<usize, Error> {
    let elements: i64 = word.trim().parse().map_err(|e: std::num::ParseIntError| {
        Error::parse_error(format!("element count '{}'", word), Some(e.to_string()))
    })?;
    Ok(elements.max(0) as usize)
}
