use core::fmt;

use embedded_hal::i2c::I2c;
use math::{Vector, G_TO_MS2};

use crate::registers::*;
use crate::utils::*;
use crate::{AccelRange, RawFrame, SensorData, FRAME_SIZE, FXOS8700_DEFAULT_I2C_ADDR, FXOS8700_DEVICE_ID, MAG_UT_PER_LSB};

#[derive(Debug)]
pub enum Error<E>
{
    /// An i2c bus transaction failed, transactions are never retried so the underlying bus error
    /// is handed straight back to the caller.
    I2c(E),

    /// The chip at the configured address did not report the expected `WHO_AM_I` device ID,
    /// carries whatever ID it reported instead.
    WrongDeviceId(u8),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::I2c(err) => write!(f, "i2c bus error: {:?}", err),
            Self::WrongDeviceId(id) => write!(f, "unexpected WHO_AM_I device id: {:#04x}", id),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}

pub struct Fxos8700<I2C>
{
    /// i2c bus that we actually use to communicate with the FXOS8700 chip.
    i2c: I2C,

    /// i2c address that the chip is located at.
    address: u8,

    /// Full scale range the accelerometer is configured with, used to scale raw samples.
    accel_range: AccelRange,
}

impl<I2C, E> Fxos8700<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Create a new FXOS8700 instance on the given I2C bus, at the chip's default address.
    ///
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, FXOS8700_DEFAULT_I2C_ADDR)
    }

    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Fxos8700 {
            i2c,
            address,
            accel_range: AccelRange::default(),
        }
    }

    /// Gives the underlying i2c bus back to the caller.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Gets the device ID of this FXOS8700 chip, practically speaking this just gets the contents
    /// of the `WHO_AM_I` register.
    ///
    pub fn get_device_id(&mut self) -> Result<u8, Error<E>> {
        self.get_register_value(WHO_AM_I)
    }

    /// Checks if the i2c connection with the FXOS8700 chip is working as expected, practically
    /// speaking this function just checks if it can read the device ID and if the device ID is
    /// the expected value.
    ///
    pub fn connection_okay(&mut self) -> bool {
        self.get_device_id().map(|id| id == FXOS8700_DEVICE_ID).unwrap_or(false)
    }

    /// Runs the full configuration sequence: verify the chip identity, drop into standby, select
    /// the accelerometer range, and bring the sensor up in high resolution 100Hz hybrid mode
    /// with the magnetometer data registers mapped directly behind the accelerometer's.
    ///
    /// Needs to be called once before samples are read; a chip that does not report the expected
    /// device ID is left untouched.
    ///
    pub fn init(&mut self, range: AccelRange) -> Result<(), Error<E>> {
        log::info!("Configuring FXOS8700");

        let id = self.get_device_id()?;
        log::debug!("WHO_AM_I returned {:#04x}", id);
        if id != FXOS8700_DEVICE_ID {
            return Err(Error::WrongDeviceId(id));
        }

        // Standby mode, required to make changes to the configuration registers.
        self.set_register_value(CTRL_REG1, 0x00)?;

        // Select the accelerometer full scale range.
        self.set_register_value(XYZ_DATA_CFG, range.as_register())?;
        self.accel_range = range;

        // High resolution mode.
        self.set_register_value(CTRL_REG2, 0x02)?;

        // Active, normal mode, low noise, 100Hz in hybrid mode.
        self.set_register_value(CTRL_REG1, 0x15)?;

        // Hybrid mode, magnetometer oversampling rate = 16.
        self.set_register_value(M_CTRL_REG1, 0x1F)?;

        // Jump to register 0x33 after reading 0x06.
        self.set_register_value(M_CTRL_REG2, 0x20)?;

        Ok(())
    }

    /// Puts the sensor into standby mode, it stops producing samples but starts accepting
    /// configuration register writes.
    ///
    pub fn standby(&mut self) -> Result<(), Error<E>> {
        let state = self.get_register_value(CTRL_REG1)?;
        self.set_register_value(CTRL_REG1, state & !CTRL1_ACTIVE)
    }

    /// Takes the sensor out of standby mode so it starts producing samples again.
    ///
    pub fn active(&mut self) -> Result<(), Error<E>> {
        let state = self.get_register_value(CTRL_REG1)?;
        self.set_register_value(CTRL_REG1, state | CTRL1_ACTIVE)
    }

    /// Reconfigures the accelerometer full scale range. The sensor is briefly dropped into
    /// standby because `XYZ_DATA_CFG` writes are ignored while it is active; the previous mode
    /// bits are restored afterwards.
    ///
    pub fn set_accel_range(&mut self, range: AccelRange) -> Result<(), Error<E>> {
        let ctrl1 = self.get_register_value(CTRL_REG1)?;
        self.set_register_value(CTRL_REG1, ctrl1 & !CTRL1_ACTIVE)?;
        self.set_register_value(XYZ_DATA_CFG, range.as_register())?;
        self.accel_range = range;
        self.set_register_value(CTRL_REG1, ctrl1)
    }

    /// Gets the full scale range the accelerometer is currently configured with.
    ///
    pub fn get_accel_range(&mut self) -> Result<AccelRange, Error<E>> {
        let value = self.get_register_value(XYZ_DATA_CFG)?;
        self.accel_range = AccelRange::from_register(value);
        Ok(self.accel_range)
    }

    /// Checks the ZYXDR flag of the status register, i.e. whether a fresh sample is available on
    /// all three accelerometer axes.
    ///
    pub fn data_ready(&mut self) -> Result<bool, Error<E>> {
        Ok(self.get_register_value(STATUS)? & STATUS_ZYXDR != 0)
    }

    /// Grabs one full burst sample: the status byte plus the six accelerometer and the six
    /// magnetometer data registers, all in a single i2c transaction.
    ///
    pub fn get_frame(&mut self) -> Result<RawFrame, Error<E>> {
        let mut data = [0u8; FRAME_SIZE];
        self.i2c
            .write_read(self.address, &[ STATUS | AUTO_INCREMENT ], &mut data)
            .map_err(Error::I2c)?;
        Ok(RawFrame(data))
    }

    /// Gets the current acceleration and magnetic field strength all at once, note that this is
    /// more efficient than calling `get_accel` and `get_mag` after one another because this
    /// method retrieves all data in a single i2c transaction.
    ///
    pub fn get_data(&mut self) -> Result<SensorData, Error<E>> {
        Ok(self.get_frame()?.decode(self.accel_range))
    }

    /// Get the current accelerometer sensor values (in m/s^2).
    ///
    pub fn get_accel(&mut self) -> Result<Vector, Error<E>> {
        let mut data = [ 0u8; 6 ];
        self.i2c.write_read(self.address, &[ OUT_X_MSB ], &mut data).map_err(Error::I2c)?;
        let mut accel = [0.0f32; 3];
        for i in 0..3 {
            let raw = accel_from_regs(data[i*2], data[i*2+1]);
            accel[i] = (raw as f32) * self.accel_range.g_per_lsb() * G_TO_MS2;
        }
        Ok(Vector::from(accel))
    }

    /// Get the current magnetometer sensor values (in uTesla).
    ///
    pub fn get_mag(&mut self) -> Result<Vector, Error<E>> {
        let mut data = [ 0u8; 6 ];
        self.i2c.write_read(self.address, &[ M_OUT_X_MSB ], &mut data).map_err(Error::I2c)?;
        let mut mag = [0.0f32; 3];
        for i in 0..3 {
            mag[i] = (mag_from_regs(data[i*2], data[i*2+1]) as f32) * MAG_UT_PER_LSB;
        }
        Ok(Vector::from(mag))
    }

    pub fn get_register_value(&mut self, register: u8) -> Result<u8, Error<E>> {
        let mut state = [ 0u8 ];
        self.i2c.write_read(self.address, &[ register ], &mut state).map_err(Error::I2c)?;
        Ok(state[0])
    }

    pub fn set_register_value(&mut self, register: u8, value: u8) -> Result<(), Error<E>> {
        self.i2c.write(self.address, &[ register, value ]).map_err(Error::I2c)
    }
}
