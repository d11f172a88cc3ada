#![cfg_attr(not(test), no_std)]

use embedded_hal::i2c::I2c;

/// Default i2c address of the PCF8574 expander (all three address pins low).
///
pub const PCF8574_DEFAULT_I2C_ADDR: u8 = 0x20;

/// Driver for the PCF8574 8-bit i2c GPIO expander.
///
/// The chip has no register map at all: writing a single data byte latches it onto the eight
/// quasi-bidirectional port pins, reading a single byte samples them. A pin whose latch bit is 1
/// idles high and doubles as an input.
///
pub struct Pcf8574<I2C>
{
    /// i2c bus that we actually use to communicate with the expander.
    i2c: I2C,

    /// i2c address that the expander is located at.
    address: u8,

    /// Last byte written to the output latch; the power-on state of the chip is all ones.
    outputs: u8,
}

impl<I2C, E> Pcf8574<I2C>
where
    I2C: I2c<Error = E>,
{
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, PCF8574_DEFAULT_I2C_ADDR)
    }

    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Pcf8574 {
            i2c,
            address,
            outputs: 0xFF,
        }
    }

    /// Gives the underlying i2c bus back to the caller.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Latches the given byte onto the port pins, one bit per pin.
    ///
    pub fn write_outputs(&mut self, value: u8) -> Result<(), E> {
        log::debug!("PCF8574 outputs <- {:#010b}", value);
        self.i2c.write(self.address, &[ value ])?;
        self.outputs = value;
        Ok(())
    }

    /// Samples the current state of the port pins.
    ///
    pub fn read_inputs(&mut self) -> Result<u8, E> {
        let mut state = [ 0u8 ];
        self.i2c.read(self.address, &mut state)?;
        Ok(state[0])
    }

    /// Drives a single pin high or low without disturbing the other seven, based on the last
    /// written latch byte.
    ///
    pub fn set_pin(&mut self, pin: u8, high: bool) -> Result<(), E> {
        if pin > 7 {
            log::warn!("Skipping set pin because provided value was greater than 7.");
            return Ok(());
        }
        let mut value = self.outputs & !(0b01 << pin);
        if high {
            value |= 0b01 << pin;
        }
        self.write_outputs(value)
    }

    /// The last byte written to the output latch.
    pub fn outputs(&self) -> u8 {
        self.outputs
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};

    const ADDR: u8 = PCF8574_DEFAULT_I2C_ADDR;

    #[test]
    pub fn test_write_is_a_bare_data_byte() {
        let expectations = [ I2cTrans::write(ADDR, vec![0x55]) ];
        let mut expander = Pcf8574::new(I2cMock::new(&expectations));
        expander.write_outputs(0x55).unwrap();
        assert_eq!(expander.outputs(), 0x55);
        expander.release().done();
    }

    #[test]
    pub fn test_read_samples_the_pins() {
        let expectations = [ I2cTrans::read(ADDR, vec![0b1010_0001]) ];
        let mut expander = Pcf8574::new(I2cMock::new(&expectations));
        assert_eq!(expander.read_inputs().unwrap(), 0b1010_0001);
        expander.release().done();
    }

    #[test]
    pub fn test_set_pin_preserves_other_pins() {
        let expectations = [
            I2cTrans::write(ADDR, vec![0b1111_1011]),
            I2cTrans::write(ADDR, vec![0b1111_1111]),
        ];
        let mut expander = Pcf8574::new(I2cMock::new(&expectations));
        expander.set_pin(2, false).unwrap();
        expander.set_pin(2, true).unwrap();
        expander.release().done();
    }

    #[test]
    pub fn test_out_of_range_pin_is_ignored() {
        let mut expander = Pcf8574::new(I2cMock::new(&[]));
        expander.set_pin(8, true).unwrap();
        assert_eq!(expander.outputs(), 0xFF);
        expander.release().done();
    }
}
