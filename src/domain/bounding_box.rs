/// Geographic extraction window, in decimal degrees.
///
/// The invariants (latitudes in [-90, 90], longitudes in [-180, 180],
/// north above south, east of west) are enforced on construction and on
/// deserialization, so a `BoundingBox` in hand is always a valid window.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Corners", into = "Corners")]
pub struct BoundingBox {
    north: f64,
    south: f64,
    west: f64,
    east: f64,
}

#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
struct Corners {
    north: f64,
    south: f64,
    west: f64,
    east: f64,
}

impl BoundingBox {
    pub fn new(north: f64, south: f64, west: f64, east: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&north) || !(-90.0..=90.0).contains(&south) {
            return Err(format!(
                "Latitudes must lie in [-90, 90], got north={} south={}.",
                north, south
            ));
        }
        if !(-180.0..=180.0).contains(&west) || !(-180.0..=180.0).contains(&east) {
            return Err(format!(
                "Longitudes must lie in [-180, 180], got west={} east={}.",
                west, east
            ));
        }
        if north <= south {
            return Err(format!(
                "The northern edge ({}) must be above the southern edge ({}).",
                north, south
            ));
        }
        if east <= west {
            return Err(format!(
                "The eastern edge ({}) must be east of the western edge ({}).",
                east, west
            ));
        }
        Ok(Self {
            north,
            south,
            west,
            east,
        })
    }

    pub fn north(&self) -> f64 {
        self.north
    }

    pub fn south(&self) -> f64 {
        self.south
    }

    pub fn west(&self) -> f64 {
        self.west
    }

    pub fn east(&self) -> f64 {
        self.east
    }
}

impl TryFrom<Corners> for BoundingBox {
    type Error = String;

    fn try_from(c: Corners) -> Result<Self, Self::Error> {
        BoundingBox::new(c.north, c.south, c.west, c.east)
    }
}

impl From<BoundingBox> for Corners {
    fn from(b: BoundingBox) -> Self {
        Corners {
            north: b.north,
            south: b.south,
            west: b.west,
            east: b.east,
        }
    }
}
