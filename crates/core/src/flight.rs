//! Flight capability shared by unrelated flying things.

/// Something that can fly.
///
/// Implementors only supply their numbers; the descriptions are derived.
pub trait Flyer {
    /// Display name used in descriptions.
    fn name(&self) -> &'static str;

    /// Cruising altitude in metres.
    fn altitude_m(&self) -> u32;

    /// Cruising speed in km/h.
    fn speed_kmh(&self) -> u32;

    /// Describes taking flight.
    fn fly(&self) -> String {
        format!("{} is flying", self.name())
    }

    /// Describes the flight height.
    fn flight_height(&self) -> String {
        format!("{} is flying at {}m", self.name(), self.altitude_m())
    }

    /// Describes the flight speed.
    fn fly_speed(&self) -> String {
        format!("{} is flying at {}km/h", self.name(), self.speed_kmh())
    }
}

/// A bird.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bird;

impl Flyer for Bird {
    fn name(&self) -> &'static str {
        "Bird"
    }

    fn altitude_m(&self) -> u32 {
        1_000
    }

    fn speed_kmh(&self) -> u32 {
        100
    }
}

/// A plane.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plane;

impl Flyer for Plane {
    fn name(&self) -> &'static str {
        "Plane"
    }

    fn altitude_m(&self) -> u32 {
        10_000
    }

    fn speed_kmh(&self) -> u32 {
        1_000
    }
}

/// Every description line for a flyer, in order.
#[must_use]
pub fn describe(flyer: &dyn Flyer) -> [String; 3] {
    [flyer.fly(), flyer.flight_height(), flyer.fly_speed()]
}
