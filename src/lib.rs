/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/
#![cfg_attr(not(test), no_std)]

//! Control driver for the ON Semiconductor (Aptina) MT9M114 image sensor
//! This imaging sensor runs its own onboard firmware and has multiple interfaces:
//! - Two-wire i2c for registers and firmware variables (i2c)
//! - parallel pixel data out (dout)
//! - pixel out sync (vsync, hsync, pix clock)
//! This driver is concerned only with the i2c interface: it turns camera
//! controls and mode changes into register writes, host command handshakes,
//! and system state transitions of the sensor firmware.

#[cfg(feature = "rttdebug")]
use panic_rtt_core::rprintln;

#[macro_use]
mod macros;

pub mod bus;
pub mod command;
pub mod control;
pub mod format;
pub mod patch;
pub mod registers;
pub mod shared;
pub mod state;
pub mod tables;

pub use bus::{RegWidth, RegisterEntry};
pub use command::CommandFailure;
pub use control::{Control, ControlRange, ControlStatus};
pub use format::{
    CropWindow, FormatDescriptor, FrameInterval, FrameSizeDescriptor, PixFormat,
};
pub use patch::PatchDescriptor;
pub use registers::{FirmwareError, HostCommand, SystemState};
pub use shared::SharedMt9m114;
pub use tables::{Tables, DEFAULT_TABLES};

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c::{Write, WriteRead};
use log::{error, info};
use registers::{reg, var, ResetControl, MT9M114_CHIP_ID};

/// Errors in this crate
#[derive(Debug, PartialEq)]
pub enum Error<CommE> {
    /// Sensor communication error
    Comm(CommE),

    /// The sensor did not respond in a timely manner
    Timeout,

    /// The firmware rejected a host command
    CommandFailed {
        command: HostCommand,
        reason: CommandFailure,
    },

    /// The firmware refused a control change after refreshing
    ControlRejected(ControlStatus),

    /// The firmware reported a system state with no legal transition
    ProtocolFault(u8),

    /// Something other than an MT9M114 answered; carries the chip id read
    NoDevice(u16),

    /// `detect` has not succeeded yet
    NotDetected,

    /// Argument out of the range the sensor supports
    InvalidArgument,

    /// A patch failed to apply and firmware state is unknown until `reset`
    FirmwareIndeterminate,
}

impl<CommE> Error<CommE> {
    /// Whether the whole session must be considered lost
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Comm(_) | Error::FirmwareIndeterminate)
    }
}

/// Default 7-bit address, with SADDR tied low
pub const DEFAULT_I2C_ADDRESS: u8 = 0x48;
/// Alternate 7-bit address, with SADDR tied high
pub const ALT_I2C_ADDRESS: u8 = 0x5D;

const RESET_DELAY_MS: u32 = 100;
const BOOT_POLL_DELAY_MS: u32 = 5;
const BOOT_POLL_ATTEMPTS: u32 = 100;

/// Driver configuration
#[derive(Clone, Copy)]
pub struct Config {
    /// 7-bit i2c address of the sensor
    pub address: u8,
    /// Emit debug-level traces for every step
    pub verbose: bool,
    /// Register tables, patches and supported modes
    pub tables: &'static Tables,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_I2C_ADDRESS,
            verbose: false,
            tables: &DEFAULT_TABLES,
        }
    }
}

/// Identity information read during `detect`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipIdentity {
    pub chip_id: u16,
    pub revision: u16,
    pub firmware_major: u16,
    pub firmware_minor: u16,
    pub firmware_release: u16,
}

/// State the driver tracks about the sensor between operations
pub(crate) struct Session {
    pub(crate) identity: ChipIdentity,
    pub(crate) format: &'static FormatDescriptor,
    pub(crate) frame_size: &'static FrameSizeDescriptor,
    pub(crate) frame_interval: FrameInterval,
    /// Only decides which fix-ups follow later control writes
    pub(crate) ae_enabled: bool,
}

/// Main driver struct
pub struct Mt9m114<I2C, D> {
    i2c: I2C,
    delay: D,
    config: Config,
    session: Option<Session>,
    indeterminate: bool,
}

impl<I2C, D> Mt9m114<I2C, D> {
    /// Give back the bus and delay provider
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Chip identity, once `detect` has succeeded
    pub fn identity(&self) -> Option<ChipIdentity> {
        self.session.as_ref().map(|s| s.identity)
    }

    /// Whether AE was last known to be enabled
    pub fn auto_exposure_enabled(&self) -> bool {
        self.session.as_ref().map_or(false, |s| s.ae_enabled)
    }
}

impl<I2C, D, CommE> Mt9m114<I2C, D>
where
    I2C: Write<Error = CommE> + WriteRead<Error = CommE>,
    D: DelayMs<u32>,
{
    pub fn new(i2c: I2C, delay: D, config: Config) -> Self {
        Self {
            i2c,
            delay,
            config,
            session: None,
            indeterminate: false,
        }
    }

    pub fn default(i2c: I2C, delay: D) -> Self {
        Self::new(i2c, delay, Config::default())
    }

    /// Verify the chip id and read version information.
    /// On success this starts a new session with the first format,
    /// frame size and frame interval of the tables selected.
    pub fn detect(&mut self) -> Result<ChipIdentity, crate::Error<CommE>> {
        let chip_id = match self.read_u16(reg::CHIP_ID) {
            Ok(id) => id,
            Err(e) => {
                error!("detecting chip @ {:#04x} failed", self.config.address);
                return Err(e);
            }
        };
        if chip_id != MT9M114_CHIP_ID {
            error!(
                "unexpected chip @ {:#04x} with id {:#06x}, expected {:#06x}",
                self.config.address, chip_id, MT9M114_CHIP_ID
            );
            return Err(Error::NoDevice(chip_id));
        }

        let identity = ChipIdentity {
            chip_id,
            firmware_major: self.read_u16(var::MON_MAJOR_VERSION)?,
            firmware_minor: self.read_u16(var::MON_MINOR_VERSION)?,
            firmware_release: self.read_u16(var::MON_RELEASE_VERSION)?,
            revision: self.read_u16(reg::CUSTOMER_REV)?,
        };
        info!(
            "chip found @ {:#04x} with id {:#06x}, version {}.{}.{}, release {:#x}",
            self.config.address,
            identity.chip_id,
            identity.firmware_major,
            identity.firmware_minor,
            identity.revision,
            identity.firmware_release
        );

        let tables = self.config.tables;
        let format = tables.formats.first().ok_or(Error::InvalidArgument)?;
        let frame_size =
            tables.frame_sizes.first().ok_or(Error::InvalidArgument)?;
        self.session = Some(Session {
            identity,
            format,
            frame_size,
            frame_interval: frame_size.frame_intervals[0],
            ae_enabled: false,
        });
        Ok(identity)
    }

    /// Bring the sensor from power-on into streaming with the default
    /// format, frame size and frame interval, patches applied, and AE and
    /// AWB enabled.
    pub fn initialize(&mut self) -> Result<(), crate::Error<CommE>> {
        #[cfg(feature = "rttdebug")]
        rprintln!("mt9m114-i2c init start");

        let res = self.init_sequence();
        match res {
            Ok(()) => info!(
                "initialization of chip @ {:#04x} succeeded",
                self.config.address
            ),
            Err(_) => error!(
                "initialization of chip @ {:#04x} failed",
                self.config.address
            ),
        }

        #[cfg(feature = "rttdebug")]
        rprintln!("mt9m114-i2c init done");
        res
    }

    fn init_sequence(&mut self) -> Result<(), crate::Error<CommE>> {
        self.session()?;
        let tables = self.config.tables;

        self.reset()?;
        self.write_table(tables.pll)?;
        self.write_table(tables.sensor_optimization)?;
        self.write_table(tables.errata_1)?;
        self.write_table(tables.errata_2)?;
        self.change_config()?;

        for patch in tables.patches {
            self.apply_patch(patch)?;
        }

        // frame interval programming consults this flag
        self.session_mut()?.ae_enabled = true;

        let format = tables.formats.first().ok_or(Error::InvalidArgument)?;
        let frame_size =
            tables.frame_sizes.first().ok_or(Error::InvalidArgument)?;
        self.set_format(format)?;
        self.set_frame_size(frame_size)?;
        self.set_frame_interval(frame_size.frame_intervals[0])?;

        self.write_table(tables.pga)?;
        self.write_table(tables.awb)?;
        self.write_table(tables.cpipe_preference)?;
        self.write_table(tables.features)?;
        // enables AE and AWB on the UVC side
        self.write_table(tables.uvc_defaults)?;

        self.change_config()
    }

    /// Pulse the soft reset and wait for the firmware to boot.
    /// Firmware does not stream after this until a change config.
    pub fn reset(&mut self) -> Result<(), crate::Error<CommE>> {
        #[cfg(feature = "rttdebug")]
        rprintln!("mt9m114-i2c reset start");

        let res = self.soft_reset();
        match res {
            Ok(()) => {
                self.indeterminate = false;
                info!("resetting chip succeeded");
            }
            Err(_) => error!("resetting chip failed"),
        }
        res
    }

    fn soft_reset(&mut self) -> Result<(), crate::Error<CommE>> {
        let soft_reset = ResetControl::SOFT_RESET.bits();
        self.read_modify_write16(reg::RESET_AND_MISC_CONTROL, soft_reset, 0)?;
        self.delay.delay_ms(RESET_DELAY_MS);
        self.read_modify_write16(reg::RESET_AND_MISC_CONTROL, 0, soft_reset)?;
        self.delay.delay_ms(RESET_DELAY_MS);
        self.poll_u16(
            reg::COMMAND_REGISTER,
            HostCommand::SetState as u16,
            0x0000,
            BOOT_POLL_DELAY_MS,
            BOOT_POLL_ATTEMPTS,
        )?;
        self.write_table(self.config.tables.errata_2)
    }

    /// Debug access: read a register or variable of 1, 2 or 4 bytes
    pub fn read_register(
        &mut self,
        address: u16,
        size: u8,
    ) -> Result<u32, crate::Error<CommE>> {
        self.ensure_determinate()?;
        let width = RegWidth::from_size(size).ok_or_else(|| {
            error!("unsupported register size {}", size);
            Error::InvalidArgument
        })?;
        let val = self.read(address, width)?;
        vdebug!(self, "register {:#06x}, size {}, value {:#x}", address, size, val);
        Ok(val)
    }

    /// Debug access: write a register or variable of 1, 2 or 4 bytes,
    /// then refresh so UVC variables take effect
    pub fn write_register(
        &mut self,
        address: u16,
        size: u8,
        val: u32,
    ) -> Result<(), crate::Error<CommE>> {
        self.ensure_determinate()?;
        let width = RegWidth::from_size(size).ok_or_else(|| {
            error!("unsupported register size {}", size);
            Error::InvalidArgument
        })?;
        self.write(address, width, val)?;
        vdebug!(self, "register {:#06x}, size {}, value {:#x}", address, size, val);
        self.refresh()
    }

    /// Refuse to touch the firmware after a failed patch until `reset`
    pub(crate) fn ensure_determinate(&self) -> Result<(), crate::Error<CommE>> {
        if self.indeterminate {
            return Err(Error::FirmwareIndeterminate);
        }
        Ok(())
    }

    pub(crate) fn session(&self) -> Result<&Session, crate::Error<CommE>> {
        self.ensure_determinate()?;
        self.session.as_ref().ok_or(Error::NotDetected)
    }

    pub(crate) fn session_mut(
        &mut self,
    ) -> Result<&mut Session, crate::Error<CommE>> {
        self.ensure_determinate()?;
        self.session.as_mut().ok_or(Error::NotDetected)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use embedded_hal_mock::delay::MockNoop;
    use embedded_hal_mock::i2c::{Mock as I2cMock, Transaction};

    pub const ADDR: u8 = DEFAULT_I2C_ADDRESS;

    pub fn driver(expectations: &[Transaction]) -> Mt9m114<I2cMock, MockNoop> {
        Mt9m114::default(I2cMock::new(expectations), MockNoop::new())
    }

    /// Driver with a session as `initialize` leaves it
    pub fn session_driver(
        expectations: &[Transaction],
        ae_enabled: bool,
    ) -> Mt9m114<I2cMock, MockNoop> {
        let mut drv = driver(expectations);
        let size = &DEFAULT_TABLES.frame_sizes[0];
        drv.session = Some(Session {
            identity: ChipIdentity {
                chip_id: MT9M114_CHIP_ID,
                revision: 0,
                firmware_major: 0,
                firmware_minor: 0,
                firmware_release: 0,
            },
            format: &DEFAULT_TABLES.formats[0],
            frame_size: size,
            frame_interval: size.frame_intervals[0],
            ae_enabled,
        });
        drv
    }

    pub fn finish(drv: Mt9m114<I2cMock, MockNoop>) {
        let (mut i2c, _) = drv.release();
        i2c.done();
    }

    pub fn write16(reg: u16, val: u16) -> Transaction {
        let r = reg.to_be_bytes();
        let v = val.to_be_bytes();
        Transaction::write(ADDR, vec![r[0], r[1], v[0], v[1]])
    }

    pub fn write8(reg: u16, val: u8) -> Transaction {
        let r = reg.to_be_bytes();
        Transaction::write(ADDR, vec![r[0], r[1], val])
    }

    pub fn write32(reg: u16, val: u32) -> Transaction {
        let mut buf = reg.to_be_bytes().to_vec();
        buf.extend_from_slice(&val.to_be_bytes());
        Transaction::write(ADDR, buf)
    }

    pub fn read16(reg: u16, val: u16) -> Transaction {
        Transaction::write_read(ADDR, reg.to_be_bytes().to_vec(), val.to_be_bytes().to_vec())
    }

    pub fn read8(reg: u16, val: u8) -> Transaction {
        Transaction::write_read(ADDR, reg.to_be_bytes().to_vec(), vec![val])
    }

    pub fn read32(reg: u16, val: u32) -> Transaction {
        Transaction::write_read(ADDR, reg.to_be_bytes().to_vec(), val.to_be_bytes().to_vec())
    }

    /// Writes `write_table` performs for `entries`
    pub fn table_writes(entries: &[RegisterEntry]) -> Vec<Transaction> {
        entries
            .iter()
            .take_while(|e| !e.is_end())
            .map(|e| match e.width {
                RegWidth::U8 => write8(e.address, e.value as u8),
                RegWidth::U16 => write16(e.address, e.value as u16),
                RegWidth::U32 => write32(e.address, e.value),
            })
            .collect()
    }

    /// Successful handshake for `command`
    pub fn command_ok(command: HostCommand) -> Vec<Transaction> {
        let bit = command as u16;
        vec![
            read16(reg::COMMAND_REGISTER, 0x0000),
            write16(reg::COMMAND_REGISTER, bit | registers::HOST_COMMAND_OK),
            read16(reg::COMMAND_REGISTER, 0x0000),
            read16(reg::COMMAND_REGISTER, registers::HOST_COMMAND_OK),
        ]
    }

    pub fn wait_for_vertical_blanking() -> Vec<Transaction> {
        let mut t = vec![
            write16(var::CMD_HANDLER_WAIT_EVENT_ID, 0x0002),
            write16(var::CMD_HANDLER_NUM_EVENTS, 0x0001),
        ];
        t.extend(command_ok(HostCommand::WaitForEvent));
        t
    }

    pub fn change_config() -> Vec<Transaction> {
        let mut t = vec![write8(
            var::SYSMGR_NEXT_STATE,
            SystemState::ConfigChangePending as u8,
        )];
        t.extend(command_ok(HostCommand::SetState));
        t
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn detect_reads_identity_and_opens_session() {
        let expectations = [
            read16(reg::CHIP_ID, MT9M114_CHIP_ID),
            read16(var::MON_MAJOR_VERSION, 5),
            read16(var::MON_MINOR_VERSION, 3),
            read16(var::MON_RELEASE_VERSION, 0x0202),
            read16(reg::CUSTOMER_REV, 0x0011),
        ];
        let mut drv = driver(&expectations);
        let id = drv.detect().unwrap();
        assert_eq!(id.chip_id, MT9M114_CHIP_ID);
        assert_eq!(id.revision, 0x0011);
        assert_eq!(id.firmware_release, 0x0202);
        assert_eq!(drv.identity(), Some(id));
        assert_eq!(drv.current_frame_interval().unwrap(), FrameInterval::new(1, 30));
        finish(drv);
    }

    #[test]
    fn detect_rejects_foreign_chip() {
        let expectations = [read16(reg::CHIP_ID, 0x1324)];
        let mut drv = driver(&expectations);
        assert_eq!(drv.detect(), Err(Error::NoDevice(0x1324)));
        assert!(drv.identity().is_none());
        finish(drv);
    }

    #[test]
    fn session_operations_require_detection() {
        let mut drv = driver(&[]);
        assert_eq!(drv.get_control(Control::Brightness), Err(Error::NotDetected));
        finish(drv);
    }

    #[test]
    fn debug_register_access_rejects_odd_sizes() {
        let expectations = [read32(0xC808, 0x02DC_6C00)];
        let mut drv = driver(&expectations);
        assert_eq!(drv.read_register(0xC808, 3), Err(Error::InvalidArgument));
        assert_eq!(drv.read_register(0xC808, 4), Ok(0x02DC_6C00));
        finish(drv);
    }

    #[test]
    fn indeterminate_firmware_refuses_all_bus_work() {
        let mut drv = session_driver(&[], true);
        drv.indeterminate = true;
        let poisoned = Err(Error::FirmwareIndeterminate);

        assert_eq!(drv.initialize(), poisoned);
        assert_eq!(drv.set_stream_enabled(true), poisoned);
        assert_eq!(drv.set_system_state(SystemState::EnterStreaming), poisoned);
        assert_eq!(drv.system_state_raw(), Err(Error::FirmwareIndeterminate));
        assert_eq!(drv.change_config(), poisoned);
        assert_eq!(drv.refresh(), poisoned);
        assert_eq!(drv.wait_for_vertical_blanking(), poisoned);
        assert_eq!(drv.issue_command(HostCommand::Refresh), poisoned);
        assert_eq!(drv.write_register(var::UVC_BRIGHTNESS_CONTROL, 2, 99), poisoned);
        assert_eq!(
            drv.read_register(var::UVC_BRIGHTNESS_CONTROL, 2),
            Err(Error::FirmwareIndeterminate)
        );
        assert_eq!(drv.set_control(Control::Brightness, 99), poisoned);
        assert_eq!(drv.select_frame_interval(FrameInterval::new(1, 30)), poisoned);
        assert_eq!(drv.chip_frame_rate(), Err(Error::FirmwareIndeterminate));
        finish(drv);
    }

    #[test]
    fn reset_pulses_soft_reset_and_waits_for_boot() {
        let mut expectations = vec![
            read16(reg::RESET_AND_MISC_CONTROL, 0x0230),
            write16(reg::RESET_AND_MISC_CONTROL, 0x0231),
            read16(reg::RESET_AND_MISC_CONTROL, 0x0231),
            write16(reg::RESET_AND_MISC_CONTROL, 0x0230),
            read16(reg::COMMAND_REGISTER, HostCommand::SetState as u16),
            read16(reg::COMMAND_REGISTER, 0x0000),
        ];
        expectations.push(write16(reg::LOGICAL_ADDRESS_ACCESS, 0x0000));
        expectations.push(write16(reg::RESET_REGISTER, 0x0234));
        let mut drv = driver(&expectations);
        drv.indeterminate = true;
        drv.reset().unwrap();
        assert!(!drv.indeterminate);
        finish(drv);
    }
}
