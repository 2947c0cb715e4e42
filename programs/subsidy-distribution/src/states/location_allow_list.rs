use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::constants::{MAX_ELIGIBLE_LOCATIONS, MAX_LOCATION_LEN};

/// Approved locations for remote-area eligibility
#[account]
#[derive(InitSpace, Debug)]
pub struct LocationAllowList {
    #[max_len(MAX_ELIGIBLE_LOCATIONS, MAX_LOCATION_LEN)]
    pub locations: Vec<String>,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl LocationAllowList {
    pub fn new(bump: u8) -> Self {
        Self {
            locations: Vec::new(),
            bump,
        }
    }

    pub fn contains(&self, location: &str) -> bool {
        self.locations.iter().any(|l| l == location)
    }

    /// Inserts a location. Returns false when it was already present.
    pub fn add(&mut self, location: &str) -> Result<bool> {
        validate_location(location)?;
        if self.contains(location) {
            return Ok(false);
        }
        require!(
            self.locations.len() < MAX_ELIGIBLE_LOCATIONS,
            ErrorCode::LocationListFull
        );
        self.locations.push(location.to_string());
        Ok(true)
    }

    /// Removes a location. Returns false when it was absent.
    pub fn remove(&mut self, location: &str) -> bool {
        let before = self.locations.len();
        self.locations.retain(|l| l != location);
        self.locations.len() != before
    }
}

pub fn validate_location(location: &str) -> Result<()> {
    require!(
        !location.is_empty() && location.len() <= MAX_LOCATION_LEN,
        ErrorCode::InvalidLocation
    );
    Ok(())
}
