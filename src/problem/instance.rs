use crate::types::CityId;
use std::fs::File;
use std::io::{BufReader, Read};

/// One shortest-trip query as read from the input, with every identifier
/// already remapped from the external 1-indexed form to 0-indexed.
#[derive(Debug)]
pub struct Instance {
    /// Number of real cities, excluding the virtual hub.
    pub n_cities: usize,
    /// 0-indexed city the trip starts from.
    pub source: CityId,
    /// 0-indexed city the trip ends at.
    pub target: CityId,
    /// 0-indexed cities that have an airport.
    pub airports: Vec<CityId>,
    /// 0-indexed railway endpoints. Undirected; not retained past graph
    /// construction by callers.
    pub routes: Vec<(CityId, CityId)>,
}

/// Pulls the next whitespace-delimited integer out of the token stream.
fn next_int<'a, I>(tokens: &mut I, what: &str) -> Result<usize, String>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens.next().ok_or_else(|| format!("Expected {}", what))?;
    token
        .parse()
        .map_err(|e| format!("Could not parse {}: {}", what, e))
}

/// Reads a 1-indexed city identifier and remaps it to 0-indexed.
fn next_city<'a, I>(tokens: &mut I, n_cities: usize, what: &str) -> Result<CityId, String>
where
    I: Iterator<Item = &'a str>,
{
    let raw = next_int(tokens, what)?;
    let id = raw
        .checked_sub(1)
        .ok_or_else(|| format!("{} underflow", what))?;
    if id >= n_cities {
        return Err(format!("{} out of range: {} of {} cities", what, raw, n_cities));
    }
    Ok(id as CityId)
}

impl Instance {
    /// Loads an instance from a file.
    pub fn load(filename: &str) -> Result<Self, String> {
        let file = File::open(filename).map_err(|e| format!("File not found: {}", e))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parses an instance from a whitespace-delimited integer stream:
    /// `N M K S T`, then `K` airport cities, then `M` route pairs, all
    /// city identifiers 1-indexed.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, String> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| format!("Could not read input: {}", e))?;
        let mut tokens = text.split_ascii_whitespace();

        let n_cities = next_int(&mut tokens, "number of cities")?;
        let n_routes = next_int(&mut tokens, "number of routes")?;
        let n_airports = next_int(&mut tokens, "number of airports")?;
        let source = next_city(&mut tokens, n_cities, "source city")?;
        let target = next_city(&mut tokens, n_cities, "target city")?;

        let mut airports = Vec::with_capacity(n_airports);
        for _ in 0..n_airports {
            airports.push(next_city(&mut tokens, n_cities, "airport city")?);
        }

        let mut routes = Vec::with_capacity(n_routes);
        for _ in 0..n_routes {
            let from = next_city(&mut tokens, n_cities, "route origin")?;
            let until = next_city(&mut tokens, n_cities, "route destination")?;
            routes.push((from, until));
        }

        Ok(Instance {
            n_cities,
            source,
            target,
            airports,
            routes,
        })
    }
}
