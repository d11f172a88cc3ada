

pub const STATUS: u8 = 0x00;
pub const OUT_X_MSB: u8 = 0x01;
pub const OUT_X_LSB: u8 = 0x02;
pub const OUT_Y_MSB: u8 = 0x03;
pub const OUT_Y_LSB: u8 = 0x04;
pub const OUT_Z_MSB: u8 = 0x05;
pub const OUT_Z_LSB: u8 = 0x06;

pub const WHO_AM_I: u8 = 0x0D; // 11000111   r

pub const XYZ_DATA_CFG: u8 = 0x0E; //[4] hpf_out, [1:0] fs

pub const CTRL_REG1: u8 = 0x2A; //[7:6] aslp_rate, [5:3] dr, [2] lnoise, [1] f_read, [0] active
pub const CTRL_REG2: u8 = 0x2B; //[1:0] mods
pub const CTRL_REG3: u8 = 0x2C;
pub const CTRL_REG4: u8 = 0x2D;
pub const CTRL_REG5: u8 = 0x2E;

pub const M_DR_STATUS: u8 = 0x32;
pub const M_OUT_X_MSB: u8 = 0x33;
pub const M_OUT_X_LSB: u8 = 0x34;
pub const M_OUT_Y_MSB: u8 = 0x35;
pub const M_OUT_Y_LSB: u8 = 0x36;
pub const M_OUT_Z_MSB: u8 = 0x37;
pub const M_OUT_Z_LSB: u8 = 0x38;

pub const M_CTRL_REG1: u8 = 0x5B; //[7] m_acal, [6] m_rst, [5] m_ost, [4:2] m_os, [1:0] m_hms
pub const M_CTRL_REG2: u8 = 0x5C; //[5] hyb_autoinc_mode
pub const M_CTRL_REG3: u8 = 0x5D;

/// Or'ed onto a register address to have the read pointer auto increment through the data
/// registers during a burst read.
pub const AUTO_INCREMENT: u8 = 0x80;

/// Active mode bit of `CTRL_REG1`, the sensor only produces samples while this is set and only
/// accepts configuration writes while it is not.
pub const CTRL1_ACTIVE: u8 = 0x01;

/// ZYXDR flag of the status register, set when a new sample is available on all three
/// accelerometer axes.
pub const STATUS_ZYXDR: u8 = 0x08;
