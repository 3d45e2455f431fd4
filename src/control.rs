/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Camera controls.
//!
//! Each control maps onto one firmware variable. How a new value is made to
//! take effect differs per control and is part of the firmware contract:
//! UVC controls are refreshed at a frame boundary and then report a status,
//! CAM side bits need a config change, and the auto modes need follow-up
//! writes to keep the UVC and CAM variable sets coherent.

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c::{Write, WriteRead};
use log::{error, info, warn};

use crate::bus::RegWidth;
use crate::registers::{var, FirmwareError, LowLightMode, ReadMode};
use crate::{Error, Mt9m114};

/// Controls exposed by the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// 0 manual, 1 auto, 2 shutter priority, 3 aperture priority
    AutoExposure = 0,
    AutoWhiteBalance,
    BacklightCompensation,
    Brightness,
    Contrast,
    /// Writing runs one auto white balance pass; reads 0
    DoWhiteBalance,
    /// Absolute exposure time, 100 us units
    Exposure,
    ExposureAlgorithm,
    Gain,
    Gamma,
    /// Degrees
    Hue,
    /// 1 is 50 Hz, 2 is 60 Hz
    PowerLineFrequency,
    Saturation,
    Sharpness,
    /// Kelvin
    WhiteBalanceTemperature,
    VerticalFlip,
    HorizontalFlip,
    FadeToBlack,
}

/// Every control, in descriptor table order
pub const ALL_CONTROLS: [Control; 18] = [
    Control::AutoExposure,
    Control::AutoWhiteBalance,
    Control::BacklightCompensation,
    Control::Brightness,
    Control::Contrast,
    Control::DoWhiteBalance,
    Control::Exposure,
    Control::ExposureAlgorithm,
    Control::Gain,
    Control::Gamma,
    Control::Hue,
    Control::PowerLineFrequency,
    Control::Saturation,
    Control::Sharpness,
    Control::WhiteBalanceTemperature,
    Control::VerticalFlip,
    Control::HorizontalFlip,
    Control::FadeToBlack,
];

/// Accepted values of a control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlRange {
    pub min: i32,
    pub max: i32,
    pub step: i32,
    pub default: i32,
}

/// Why the firmware refused a control change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlStatus {
    /// A conflicting auto mode owns the control
    Busy,
    /// The control is locked by the current configuration
    Access,
    /// Any other nonzero UVC result status
    Unknown(u8),
}

/// How a raw variable value maps to a control value
#[derive(Debug, Clone, Copy)]
enum Encoding {
    Unsigned,
    Signed,
    /// Signed hundredths
    Centi,
    /// Value n is stored as `1 << n`
    OneHot,
    /// A single bit of the variable
    Bit(u16),
    /// No backing value
    Button,
}

/// What has to follow a write for the value to take effect
#[derive(Debug, Clone, Copy)]
enum Apply {
    /// Vertical blank, refresh, then check the UVC result status
    FrameBoundary,
    /// Config change
    ConfigBoundary,
    /// Vertical blank only
    VerticalBlank,
    AutoExposure,
    AutoWhiteBalance,
    OneShotWhiteBalance,
}

struct ControlDescriptor {
    control: Control,
    name: &'static str,
    address: u16,
    width: RegWidth,
    encoding: Encoding,
    apply: Apply,
    range: ControlRange,
}

const fn range(min: i32, max: i32, default: i32) -> ControlRange {
    ControlRange {
        min,
        max,
        step: 1,
        default,
    }
}

static CONTROLS: [ControlDescriptor; 18] = [
    ControlDescriptor {
        control: Control::AutoExposure,
        name: "auto exposure",
        address: var::UVC_AE_MODE_CONTROL,
        width: RegWidth::U8,
        encoding: Encoding::OneHot,
        apply: Apply::AutoExposure,
        range: range(0, 3, 1),
    },
    ControlDescriptor {
        control: Control::AutoWhiteBalance,
        name: "auto white balance",
        address: var::UVC_WHITE_BALANCE_TEMPERATURE_AUTO_CONTROL,
        width: RegWidth::U8,
        encoding: Encoding::Unsigned,
        apply: Apply::AutoWhiteBalance,
        range: range(0, 1, 1),
    },
    ControlDescriptor {
        control: Control::BacklightCompensation,
        name: "backlight compensation",
        address: var::UVC_BACKLIGHT_COMPENSATION_CONTROL,
        width: RegWidth::U16,
        encoding: Encoding::Unsigned,
        apply: Apply::FrameBoundary,
        range: range(0, 4, 1),
    },
    ControlDescriptor {
        control: Control::Brightness,
        name: "brightness",
        address: var::UVC_BRIGHTNESS_CONTROL,
        width: RegWidth::U16,
        encoding: Encoding::Unsigned,
        apply: Apply::FrameBoundary,
        range: range(0, 255, 55),
    },
    ControlDescriptor {
        control: Control::Contrast,
        name: "contrast",
        address: var::UVC_CONTRAST_CONTROL,
        width: RegWidth::U16,
        encoding: Encoding::Unsigned,
        apply: Apply::FrameBoundary,
        range: range(16, 64, 32),
    },
    ControlDescriptor {
        control: Control::DoWhiteBalance,
        name: "do white balance",
        address: var::UVC_WHITE_BALANCE_TEMPERATURE_AUTO_CONTROL,
        width: RegWidth::U8,
        encoding: Encoding::Button,
        apply: Apply::OneShotWhiteBalance,
        range: range(0, 1, 0),
    },
    ControlDescriptor {
        control: Control::Exposure,
        name: "exposure",
        address: var::UVC_EXPOSURE_TIME_ABSOLUTE_CONTROL,
        width: RegWidth::U32,
        encoding: Encoding::Unsigned,
        apply: Apply::FrameBoundary,
        range: range(1, 1000, 1),
    },
    ControlDescriptor {
        control: Control::ExposureAlgorithm,
        name: "exposure algorithm",
        address: var::AE_RULE_ALGO,
        width: RegWidth::U16,
        encoding: Encoding::Unsigned,
        apply: Apply::VerticalBlank,
        range: range(0, 3, 1),
    },
    ControlDescriptor {
        control: Control::Gain,
        name: "gain",
        address: var::UVC_GAIN_CONTROL,
        width: RegWidth::U16,
        encoding: Encoding::Unsigned,
        apply: Apply::FrameBoundary,
        range: range(0, 255, 32),
    },
    ControlDescriptor {
        control: Control::Gamma,
        name: "gamma",
        address: var::UVC_GAMMA_CONTROL,
        width: RegWidth::U16,
        encoding: Encoding::Unsigned,
        apply: Apply::FrameBoundary,
        range: range(1, 1000, 220),
    },
    ControlDescriptor {
        control: Control::Hue,
        name: "hue",
        address: var::UVC_HUE_CONTROL,
        width: RegWidth::U16,
        encoding: Encoding::Centi,
        apply: Apply::FrameBoundary,
        range: range(-22, 22, 0),
    },
    ControlDescriptor {
        control: Control::PowerLineFrequency,
        name: "power line frequency",
        address: var::UVC_POWER_LINE_FREQUENCY_CONTROL,
        width: RegWidth::U8,
        encoding: Encoding::Unsigned,
        apply: Apply::FrameBoundary,
        range: range(1, 2, 2),
    },
    ControlDescriptor {
        control: Control::Saturation,
        name: "saturation",
        address: var::UVC_SATURATION_CONTROL,
        width: RegWidth::U16,
        encoding: Encoding::Unsigned,
        apply: Apply::FrameBoundary,
        range: range(0, 255, 128),
    },
    ControlDescriptor {
        control: Control::Sharpness,
        name: "sharpness",
        address: var::UVC_SHARPNESS_CONTROL,
        width: RegWidth::U16,
        encoding: Encoding::Signed,
        apply: Apply::FrameBoundary,
        range: range(-7, 7, 0),
    },
    ControlDescriptor {
        control: Control::WhiteBalanceTemperature,
        name: "white balance temperature",
        address: var::UVC_WHITE_BALANCE_TEMPERATURE_CONTROL,
        width: RegWidth::U16,
        encoding: Encoding::Unsigned,
        apply: Apply::FrameBoundary,
        range: range(2700, 6500, 6500),
    },
    ControlDescriptor {
        control: Control::VerticalFlip,
        name: "vertical flip",
        address: var::CAM_SENSOR_CONTROL_READ_MODE,
        width: RegWidth::U16,
        encoding: Encoding::Bit(ReadMode::VERTICAL_FLIP.bits()),
        apply: Apply::ConfigBoundary,
        range: range(0, 1, 0),
    },
    ControlDescriptor {
        control: Control::HorizontalFlip,
        name: "horizontal flip",
        address: var::CAM_SENSOR_CONTROL_READ_MODE,
        width: RegWidth::U16,
        encoding: Encoding::Bit(ReadMode::HORIZONTAL_MIRROR.bits()),
        apply: Apply::ConfigBoundary,
        range: range(0, 1, 0),
    },
    ControlDescriptor {
        control: Control::FadeToBlack,
        name: "fade to black",
        address: var::LL_MODE,
        width: RegWidth::U16,
        encoding: Encoding::Bit(LowLightMode::FADE_TO_BLACK.bits()),
        apply: Apply::VerticalBlank,
        range: range(0, 1, 1),
    },
];

impl Control {
    fn descriptor(self) -> &'static ControlDescriptor {
        &CONTROLS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Minimum, maximum, step and default
    pub fn range(self) -> ControlRange {
        self.descriptor().range
    }
}

impl<I2C, D> Mt9m114<I2C, D> {
    pub fn query_control(&self, control: Control) -> ControlRange {
        control.range()
    }
}

impl<I2C, D, CommE> Mt9m114<I2C, D>
where
    I2C: Write<Error = CommE> + WriteRead<Error = CommE>,
    D: DelayMs<u32>,
{
    /// Current value of `control`.
    /// UVC controls may read back stale values after a config change.
    pub fn get_control(
        &mut self,
        control: Control,
    ) -> Result<i32, crate::Error<CommE>> {
        self.session()?;
        let desc = control.descriptor();
        if let Encoding::Button = desc.encoding {
            return Ok(0);
        }

        let raw = self.read(desc.address, desc.width)?;
        let val = match desc.encoding {
            Encoding::Unsigned | Encoding::Button => raw as i32,
            Encoding::Signed => i32::from(raw as u16 as i16),
            Encoding::Centi => i32::from(raw as u16 as i16) / 100,
            Encoding::Bit(mask) => ((raw as u16) & mask != 0) as i32,
            Encoding::OneHot => match raw {
                0x1 => 0,
                0x2 => 1,
                0x4 => 2,
                0x8 => 3,
                other => {
                    error!("unexpected {} value {:#04x}", desc.name, other);
                    return Err(Error::ProtocolFault(other as u8));
                }
            },
        };
        vdebug!(self, "{:?} is {}", desc.control, val);
        Ok(val)
    }

    /// Change `control` and wait until the firmware has applied it
    pub fn set_control(
        &mut self,
        control: Control,
        value: i32,
    ) -> Result<(), crate::Error<CommE>> {
        self.session()?;
        let desc = control.descriptor();
        if value < desc.range.min || value > desc.range.max {
            error!(
                "{} value {} outside {}..={}",
                desc.name, value, desc.range.min, desc.range.max
            );
            return Err(Error::InvalidArgument);
        }
        info!("setting {} to {}", desc.name, value);

        match desc.apply {
            Apply::AutoExposure => self.set_auto_exposure(value),
            Apply::AutoWhiteBalance => self.set_auto_white_balance(value),
            Apply::OneShotWhiteBalance => self.do_white_balance(),
            Apply::FrameBoundary => self.set_frame_boundary(desc, value),
            Apply::ConfigBoundary => {
                self.write_control(desc, value)?;
                self.change_config()
            }
            Apply::VerticalBlank => {
                self.write_control(desc, value)?;
                self.wait_for_vertical_blanking()
            }
        }
    }

    fn write_control(
        &mut self,
        desc: &ControlDescriptor,
        value: i32,
    ) -> Result<(), crate::Error<CommE>> {
        match desc.encoding {
            Encoding::Bit(mask) if value != 0 => {
                self.read_modify_write16(desc.address, mask, 0)
            }
            Encoding::Bit(mask) => self.read_modify_write16(desc.address, 0, mask),
            Encoding::Centi => {
                let centi = value.saturating_mul(100) as i16;
                self.write(desc.address, desc.width, u32::from(centi as u16))
            }
            Encoding::OneHot => {
                if !(0..=3).contains(&value) {
                    error!("{} value {} has no mode", desc.name, value);
                    return Err(Error::InvalidArgument);
                }
                self.write(desc.address, desc.width, 1 << value)
            }
            Encoding::Unsigned | Encoding::Signed | Encoding::Button => {
                self.write(desc.address, desc.width, value as u32)
            }
        }
    }

    fn set_frame_boundary(
        &mut self,
        desc: &ControlDescriptor,
        value: i32,
    ) -> Result<(), crate::Error<CommE>> {
        self.write_control(desc, value)?;
        self.wait_for_vertical_blanking()?;
        self.refresh()?;
        self.check_uvc_status(desc)
    }

    fn check_uvc_status(
        &mut self,
        desc: &ControlDescriptor,
    ) -> Result<(), crate::Error<CommE>> {
        let status = match self.firmware_status(var::UVC_RESULT_STATUS)? {
            FirmwareError::NoError => return Ok(()),
            FirmwareError::Range => {
                warn!("requested {} was clamped", desc.name);
                return Ok(());
            }
            FirmwareError::Busy => ControlStatus::Busy,
            FirmwareError::Access => ControlStatus::Access,
            other => ControlStatus::Unknown(other.raw()),
        };
        match status {
            ControlStatus::Busy => error!(
                "{} could not be changed while its auto mode is enabled",
                desc.name
            ),
            ControlStatus::Access => error!(
                "{} could not be changed while its automatic calculation is disabled",
                desc.name
            ),
            ControlStatus::Unknown(code) => error!(
                "{} could not be changed, uvc result status {:#04x}",
                desc.name, code
            ),
        }
        Err(Error::ControlRejected(status))
    }

    /// Disabling AE makes the firmware copy the last auto-selected exposure,
    /// gain and frame interval into the manual variables.
    fn set_auto_exposure(
        &mut self,
        value: i32,
    ) -> Result<(), crate::Error<CommE>> {
        let desc = Control::AutoExposure.descriptor();
        self.write_control(desc, value)?;
        self.wait_for_vertical_blanking()?;
        self.refresh()?;

        let ae_enabled = value != 0;
        self.session_mut()?.ae_enabled = ae_enabled;

        if !ae_enabled {
            let programmed = self.read_u32(var::UVC_FRAME_INTERVAL_CONTROL)?;
            let assumed =
                self.session()?.frame_interval.to_chip_frame_interval();
            if assumed != Some(programmed) {
                warn!(
                    "frame interval changed after ae was disabled: assumed {:?}, was {}",
                    assumed, programmed
                );
            }
        }
        Ok(())
    }

    /// Toggling AWB changes the exposure without updating the UVC exposure
    /// variable. With AE disabled the held exposure is written again, after
    /// two different values, so the firmware recomputes what depends on it.
    fn set_auto_white_balance(
        &mut self,
        value: i32,
    ) -> Result<(), crate::Error<CommE>> {
        let exposure_desc = Control::Exposure.descriptor();
        let held_exposure = if self.session()?.ae_enabled {
            None
        } else {
            Some(self.read_u32(exposure_desc.address)? as i32)
        };

        let desc = Control::AutoWhiteBalance.descriptor();
        self.write_control(desc, value)?;
        self.wait_for_vertical_blanking()?;
        self.change_config()?;

        if let Some(exposure) = held_exposure {
            self.nudge_exposure(exposure.wrapping_add(1))?;
            self.nudge_exposure(exposure.wrapping_sub(1))?;
            self.set_frame_boundary(exposure_desc, exposure)?;
        }
        Ok(())
    }

    /// A rejected intermediate exposure still forces the recompute
    fn nudge_exposure(&mut self, value: i32) -> Result<(), crate::Error<CommE>> {
        match self.set_frame_boundary(Control::Exposure.descriptor(), value) {
            Err(Error::ControlRejected(status)) => {
                vdebug!(self, "exposure nudge to {} rejected: {:?}", value, status);
                Ok(())
            }
            res => res,
        }
    }

    /// Enable AWB for two frames, then lock it again
    fn do_white_balance(&mut self) -> Result<(), crate::Error<CommE>> {
        self.set_auto_white_balance(1)?;
        let waited = self
            .wait_for_vertical_blanking()
            .and_then(|_| self.wait_for_vertical_blanking());
        let locked = self.set_auto_white_balance(0);
        waited.and(locked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::HostCommand;
    use crate::test_support::*;
    use embedded_hal_mock::i2c::Transaction;

    fn frame_boundary(write: Transaction, status: u8) -> Vec<Transaction> {
        let mut t = vec![write];
        t.extend(wait_for_vertical_blanking());
        t.extend(command_ok(HostCommand::Refresh));
        t.push(read8(var::UVC_RESULT_STATUS, status));
        t
    }

    #[test]
    fn descriptor_table_follows_control_order() {
        for control in ALL_CONTROLS.iter() {
            assert_eq!(control.descriptor().control, *control);
        }
    }

    #[test]
    fn query_reports_ranges() {
        let drv = driver(&[]);
        assert_eq!(
            drv.query_control(Control::WhiteBalanceTemperature),
            ControlRange {
                min: 2700,
                max: 6500,
                step: 1,
                default: 6500
            }
        );
        assert_eq!(drv.query_control(Control::Hue).min, -22);
        assert_eq!(drv.query_control(Control::FadeToBlack).default, 1);
        finish(drv);
    }

    #[test]
    fn signed_and_scaled_values_decode() {
        let expectations = [
            read16(var::UVC_HUE_CONTROL, (-2050i16) as u16),
            read16(var::UVC_SHARPNESS_CONTROL, (-3i16) as u16),
            read32(var::UVC_EXPOSURE_TIME_ABSOLUTE_CONTROL, 480),
            read8(var::UVC_POWER_LINE_FREQUENCY_CONTROL, 2),
        ];
        let mut drv = session_driver(&expectations, true);
        assert_eq!(drv.get_control(Control::Hue), Ok(-20));
        assert_eq!(drv.get_control(Control::Sharpness), Ok(-3));
        assert_eq!(drv.get_control(Control::Exposure), Ok(480));
        assert_eq!(drv.get_control(Control::PowerLineFrequency), Ok(2));
        finish(drv);
    }

    #[test]
    fn bit_controls_decode_single_bits() {
        let expectations = [
            read16(var::CAM_SENSOR_CONTROL_READ_MODE, 0x0002),
            read16(var::CAM_SENSOR_CONTROL_READ_MODE, 0x0002),
            read16(var::LL_MODE, 0x0009),
        ];
        let mut drv = session_driver(&expectations, true);
        assert_eq!(drv.get_control(Control::VerticalFlip), Ok(1));
        assert_eq!(drv.get_control(Control::HorizontalFlip), Ok(0));
        assert_eq!(drv.get_control(Control::FadeToBlack), Ok(1));
        finish(drv);
    }

    #[test]
    fn auto_exposure_mode_decodes_one_hot() {
        let expectations = [
            read8(var::UVC_AE_MODE_CONTROL, 0x04),
            read8(var::UVC_AE_MODE_CONTROL, 0x03),
        ];
        let mut drv = session_driver(&expectations, true);
        assert_eq!(drv.get_control(Control::AutoExposure), Ok(2));
        assert_eq!(
            drv.get_control(Control::AutoExposure),
            Err(Error::ProtocolFault(0x03))
        );
        finish(drv);
    }

    #[test]
    fn do_white_balance_reads_zero_without_bus_access() {
        let mut drv = session_driver(&[], true);
        assert_eq!(drv.get_control(Control::DoWhiteBalance), Ok(0));
        finish(drv);
    }

    #[test]
    fn frame_boundary_control_checks_uvc_status() {
        let expectations = frame_boundary(write16(var::UVC_BRIGHTNESS_CONTROL, 80), 0x00);
        let mut drv = session_driver(&expectations, true);
        drv.set_control(Control::Brightness, 80).unwrap();
        finish(drv);
    }

    #[test]
    fn exposure_while_ae_enabled_is_rejected_busy() {
        let expectations =
            frame_boundary(write32(var::UVC_EXPOSURE_TIME_ABSOLUTE_CONTROL, 200), 0x09);
        let mut drv = session_driver(&expectations, true);
        assert_eq!(
            drv.set_control(Control::Exposure, 200),
            Err(Error::ControlRejected(ControlStatus::Busy))
        );
        finish(drv);
    }

    #[test]
    fn clamped_gain_is_not_an_error() {
        let expectations = frame_boundary(write16(var::UVC_GAIN_CONTROL, 255), 0x0E);
        let mut drv = session_driver(&expectations, false);
        drv.set_control(Control::Gain, 255).unwrap();
        finish(drv);
    }

    #[test]
    fn locked_contrast_reports_access_and_unknown_codes_are_kept() {
        let mut expectations = frame_boundary(write16(var::UVC_CONTRAST_CONTROL, 40), 0x08);
        expectations.extend(frame_boundary(write16(var::UVC_GAMMA_CONTROL, 300), 0x0F));
        let mut drv = session_driver(&expectations, false);
        assert_eq!(
            drv.set_control(Control::Contrast, 40),
            Err(Error::ControlRejected(ControlStatus::Access))
        );
        assert_eq!(
            drv.set_control(Control::Gamma, 300),
            Err(Error::ControlRejected(ControlStatus::Unknown(0x0F)))
        );
        finish(drv);
    }

    #[test]
    fn hue_and_sharpness_encode_signed() {
        let mut expectations = frame_boundary(write16(var::UVC_HUE_CONTROL, (-500i16) as u16), 0);
        expectations.extend(frame_boundary(
            write16(var::UVC_SHARPNESS_CONTROL, (-7i16) as u16),
            0,
        ));
        let mut drv = session_driver(&expectations, true);
        drv.set_control(Control::Hue, -5).unwrap();
        drv.set_control(Control::Sharpness, -7).unwrap();
        finish(drv);
    }

    #[test]
    fn flip_is_read_modify_write_then_config_change() {
        let mut expectations = vec![
            read16(var::CAM_SENSOR_CONTROL_READ_MODE, 0x0001),
            write16(var::CAM_SENSOR_CONTROL_READ_MODE, 0x0003),
        ];
        expectations.extend(change_config());
        expectations.push(read16(var::CAM_SENSOR_CONTROL_READ_MODE, 0x0003));
        expectations.push(write16(var::CAM_SENSOR_CONTROL_READ_MODE, 0x0002));
        expectations.extend(change_config());
        let mut drv = session_driver(&expectations, true);
        drv.set_control(Control::VerticalFlip, 1).unwrap();
        drv.set_control(Control::HorizontalFlip, 0).unwrap();
        finish(drv);
    }

    #[test]
    fn fade_to_black_and_algorithm_wait_for_vertical_blanking() {
        let mut expectations = vec![
            read16(var::LL_MODE, 0x0009),
            write16(var::LL_MODE, 0x0001),
        ];
        expectations.extend(wait_for_vertical_blanking());
        expectations.push(write16(var::AE_RULE_ALGO, 2));
        expectations.extend(wait_for_vertical_blanking());
        let mut drv = session_driver(&expectations, true);
        drv.set_control(Control::FadeToBlack, 0).unwrap();
        drv.set_control(Control::ExposureAlgorithm, 2).unwrap();
        finish(drv);
    }

    #[test]
    fn disabling_ae_compares_programmed_interval() {
        let mut expectations = vec![write8(var::UVC_AE_MODE_CONTROL, 0x01)];
        expectations.extend(wait_for_vertical_blanking());
        expectations.extend(command_ok(HostCommand::Refresh));
        // firmware picked another interval: warned about, not an error
        expectations.push(read32(var::UVC_FRAME_INTERVAL_CONTROL, 667));
        let mut drv = session_driver(&expectations, true);
        drv.set_control(Control::AutoExposure, 0).unwrap();
        assert!(!drv.auto_exposure_enabled());
        finish(drv);
    }

    #[test]
    fn enabling_ae_skips_interval_check() {
        let mut expectations = vec![write8(var::UVC_AE_MODE_CONTROL, 0x08)];
        expectations.extend(wait_for_vertical_blanking());
        expectations.extend(command_ok(HostCommand::Refresh));
        let mut drv = session_driver(&expectations, false);
        drv.set_control(Control::AutoExposure, 3).unwrap();
        assert!(drv.auto_exposure_enabled());
        finish(drv);
    }

    #[test]
    fn values_outside_range_never_reach_the_bus() {
        let mut drv = session_driver(&[], false);
        assert_eq!(drv.set_control(Control::Hue, 400), Err(Error::InvalidArgument));
        assert_eq!(drv.set_control(Control::Exposure, 0), Err(Error::InvalidArgument));
        assert_eq!(
            drv.set_control(Control::WhiteBalanceTemperature, 6501),
            Err(Error::InvalidArgument)
        );
        assert_eq!(drv.set_control(Control::VerticalFlip, 2), Err(Error::InvalidArgument));
        finish(drv);
    }

    #[test]
    fn ae_mode_out_of_range_is_invalid() {
        let mut drv = session_driver(&[], true);
        assert_eq!(
            drv.set_control(Control::AutoExposure, 4),
            Err(Error::InvalidArgument)
        );
        finish(drv);
    }

    #[test]
    fn awb_with_manual_exposure_reasserts_exposure() {
        let exposure = var::UVC_EXPOSURE_TIME_ABSOLUTE_CONTROL;
        let mut expectations = vec![
            read32(exposure, 100),
            write8(var::UVC_WHITE_BALANCE_TEMPERATURE_AUTO_CONTROL, 0),
        ];
        expectations.extend(wait_for_vertical_blanking());
        expectations.extend(change_config());
        // a rejected nudge does not stop the sequence
        expectations.extend(frame_boundary(write32(exposure, 101), 0x09));
        expectations.extend(frame_boundary(write32(exposure, 99), 0x00));
        expectations.extend(frame_boundary(write32(exposure, 100), 0x00));
        let mut drv = session_driver(&expectations, false);
        drv.set_control(Control::AutoWhiteBalance, 0).unwrap();
        finish(drv);
    }

    #[test]
    fn awb_with_ae_enabled_only_changes_config() {
        let mut expectations = vec![write8(var::UVC_WHITE_BALANCE_TEMPERATURE_AUTO_CONTROL, 1)];
        expectations.extend(wait_for_vertical_blanking());
        expectations.extend(change_config());
        let mut drv = session_driver(&expectations, true);
        drv.set_control(Control::AutoWhiteBalance, 1).unwrap();
        finish(drv);
    }

    #[test]
    fn one_shot_white_balance_waits_two_frames() {
        let awb = var::UVC_WHITE_BALANCE_TEMPERATURE_AUTO_CONTROL;
        let mut expectations = vec![write8(awb, 1)];
        expectations.extend(wait_for_vertical_blanking());
        expectations.extend(change_config());
        expectations.extend(wait_for_vertical_blanking());
        expectations.extend(wait_for_vertical_blanking());
        expectations.push(write8(awb, 0));
        expectations.extend(wait_for_vertical_blanking());
        expectations.extend(change_config());
        let mut drv = session_driver(&expectations, true);
        drv.set_control(Control::DoWhiteBalance, 1).unwrap();
        finish(drv);
    }
}
