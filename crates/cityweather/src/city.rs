use std::path::Path;
use thiserror::Error;

/// One entry of the city list, loaded once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Error)]
pub enum CityFileError {
    #[error("failed to read city file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed city entry on line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("city file contains no cities")]
    Empty,
}

/// Load the city list from a `name,latitude,longitude` file with a header
/// row. Any malformed line is fatal; a partial city list would silently
/// change what the visualization shows.
pub fn load_cities(path: impl AsRef<Path>) -> Result<Vec<City>, CityFileError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| CityFileError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_cities(&contents)
}

pub fn parse_cities(contents: &str) -> Result<Vec<City>, CityFileError> {
    let mut cities = Vec::new();

    // skip(1) drops the header row
    for (index, line) in contents.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let [name, latitude, longitude] = fields.as_slice() else {
            return Err(CityFileError::Malformed {
                line: index + 1,
                reason: format!("expected 3 fields, found {}", fields.len()),
            });
        };

        if name.is_empty() {
            return Err(CityFileError::Malformed {
                line: index + 1,
                reason: "empty city name".to_string(),
            });
        }

        let latitude = latitude.parse::<f64>().map_err(|_| CityFileError::Malformed {
            line: index + 1,
            reason: format!("invalid latitude {latitude:?}"),
        })?;
        let longitude = longitude.parse::<f64>().map_err(|_| CityFileError::Malformed {
            line: index + 1,
            reason: format!("invalid longitude {longitude:?}"),
        })?;

        cities.push(City {
            name: name.to_string(),
            latitude,
            longitude,
        });
    }

    if cities.is_empty() {
        return Err(CityFileError::Empty);
    }
    Ok(cities)
}
