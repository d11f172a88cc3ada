
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccelRange
{
    G2 = 0,
    G4 = 1,
    G8 = 2,
}

impl AccelRange {

    /// Converts the given full scale range setting into the bits one would need to write into the
    /// `XYZ_DATA_CFG` register to configure the sensor to use that range.
    ///
    pub fn as_register(&self) -> u8 {
        (*self) as u8
    }

    /// Gets the full scale range currently configured in the `XYZ_DATA_CFG` register based on its
    /// contents. (Note that the fourth encoding, 0b11, is reserved by the hardware and treated
    /// as the 8g range here.)
    ///
    pub fn from_register(value: u8) -> Self {
        match value & 0b011 {
            0 => Self::G2,
            1 => Self::G4,
            _ => Self::G8,
        }
    }

    /// Gets the sensitivity of the given range, i.e. how many g one increment of the raw 14 bit
    /// sensor output represents.
    ///
    pub fn g_per_lsb(&self) -> f32 {
        match self {
            Self::G2 => 0.000244,
            Self::G4 => 0.000488,
            Self::G8 => 0.000976,
        }
    }
}

impl Default for AccelRange {
    fn default() -> Self {
        AccelRange::G8
    }
}
