pub mod stego_service;

pub use stego_service::{
    CapacityReport, DifferenceReport, HideReport, RoundtripReport, StegoService,
};
