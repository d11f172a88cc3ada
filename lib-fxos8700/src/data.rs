use math::{Vector, G_TO_MS2};

use crate::utils::*;
use crate::{AccelRange, MAG_UT_PER_LSB};

/// Number of bytes in one burst sample: the status register followed by the MSB/LSB pairs of the
/// three accelerometer axes and the three magnetometer axes.
pub const FRAME_SIZE: usize = 13;

/// One burst sample exactly as it came off the bus.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFrame(pub [u8; FRAME_SIZE]);

impl RawFrame {

    /// The data ready status byte the frame starts with.
    pub fn status(&self) -> u8 {
        self.0[0]
    }

    /// Raw 14 bit accelerometer samples for the x, y and z axes.
    ///
    pub fn accel_raw(&self) -> [i16; 3] {
        [
            accel_from_regs(self.0[1], self.0[2]),
            accel_from_regs(self.0[3], self.0[4]),
            accel_from_regs(self.0[5], self.0[6]),
        ]
    }

    /// Raw 16 bit magnetometer samples for the x, y and z axes.
    ///
    pub fn mag_raw(&self) -> [i16; 3] {
        [
            mag_from_regs(self.0[7], self.0[8]),
            mag_from_regs(self.0[9], self.0[10]),
            mag_from_regs(self.0[11], self.0[12]),
        ]
    }

    /// Converts the raw frame into acceleration and magnetic field strength vectors in physical
    /// units. The accelerometer scaling depends on the full scale range the sensor was
    /// configured with when the frame was read.
    ///
    pub fn decode(&self, range: AccelRange) -> SensorData {
        let accel = self.accel_raw();
        let mag = self.mag_raw();
        SensorData {
            accel: Vector::from(accel.map(|v| (v as f32) * range.g_per_lsb() * G_TO_MS2)),
            mag: Vector::from(mag.map(|v| (v as f32) * MAG_UT_PER_LSB)),
        }
    }

    /// Copies the frame into the given buffer. A buffer shorter than the frame gets exactly as
    /// many bytes as it has room for, the frame itself is left untouched. Returns the number of
    /// bytes copied.
    ///
    pub fn copy_to(&self, buf: &mut [u8]) -> usize {
        let count = usize::min(buf.len(), FRAME_SIZE);
        buf[..count].copy_from_slice(&self.0[..count]);
        count
    }
}

pub struct SensorData
{
    /// Acceleration in m/s^2.
    pub accel: Vector,

    /// Magnetic field strength in uTesla.
    pub mag: Vector,
}
