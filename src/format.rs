/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Pixel format, frame size and frame interval selection

use core::convert::TryFrom;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c::{Write, WriteRead};
use log::{error, info, warn};

use crate::bus::RegisterEntry;
use crate::registers::{var, FirmwareError};
use crate::{Error, Mt9m114};

/// Frame intervals a frame size can list
pub const MAX_FRAME_INTERVALS: usize = 3;

const fn fourcc(code: &[u8; 4]) -> u32 {
    (code[0] as u32)
        | ((code[1] as u32) << 8)
        | ((code[2] as u32) << 16)
        | ((code[3] as u32) << 24)
}

/// Packed YUV 4:2:2, Y0 U Y1 V
pub const PIXEL_FORMAT_YUYV: u32 = fourcc(b"YUYV");

/// Array bounds reported as the crop capability
pub const CROP_BOUNDS: CropWindow = CropWindow {
    left: 0,
    top: 0,
    width: 1280,
    height: 960,
};

/// Seconds per frame as a fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInterval {
    pub numerator: u32,
    pub denominator: u32,
}

impl FrameInterval {
    /// Marks unused slots of `FrameSizeDescriptor::frame_intervals`
    pub const EMPTY: FrameInterval = FrameInterval::new(0xFFFF, 0xFFFF);

    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Frames per second in 8.8 fixed point, rounded up.
    /// `None` for a zero numerator or a rate that does not fit.
    pub fn to_chip_frame_rate(&self) -> Option<u16> {
        if self.numerator == 0 {
            return None;
        }
        let num = u64::from(self.numerator);
        let rate = (u64::from(self.denominator) * 256 + num - 1) / num;
        u16::try_from(rate).ok()
    }

    /// Frame interval in units of 100 us, rounded up.
    /// `None` for a zero denominator or an interval that does not fit.
    pub fn to_chip_frame_interval(&self) -> Option<u32> {
        if self.denominator == 0 {
            return None;
        }
        let den = u64::from(self.denominator);
        let interval = (u64::from(self.numerator) * 10_000 + den - 1) / den;
        u32::try_from(interval).ok()
    }
}

/// A pixel format the sensor can output
#[derive(Debug)]
pub struct FormatDescriptor {
    pub description: &'static str,
    /// fourcc code
    pub pixel_format: u32,
    pub bytes_per_pixel: u8,
    pub regs: &'static [RegisterEntry],
}

/// An output frame size and the frame intervals it supports
#[derive(Debug)]
pub struct FrameSizeDescriptor {
    pub width: u32,
    pub height: u32,
    pub regs: &'static [RegisterEntry],
    /// Unused slots hold `FrameInterval::EMPTY`
    pub frame_intervals: [FrameInterval; MAX_FRAME_INTERVALS],
}

impl FrameSizeDescriptor {
    /// Supported intervals, in table order
    pub fn intervals(&self) -> impl Iterator<Item = FrameInterval> + '_ {
        self.frame_intervals
            .iter()
            .copied()
            .take_while(|fi| !fi.is_empty())
    }

    pub fn supports(&self, interval: FrameInterval) -> bool {
        self.intervals().any(|fi| fi == interval)
    }
}

/// Image layout produced by a format and frame size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixFormat {
    pub width: u32,
    pub height: u32,
    pub pixel_format: u32,
    pub bytes_per_line: u32,
    pub size_image: u32,
}

impl PixFormat {
    fn of(format: &FormatDescriptor, frame_size: &FrameSizeDescriptor) -> Self {
        let bytes_per_line = u32::from(format.bytes_per_pixel) * frame_size.width;
        Self {
            width: frame_size.width,
            height: frame_size.height,
            pixel_format: format.pixel_format,
            bytes_per_line,
            size_image: bytes_per_line * frame_size.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropWindow {
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
}

/// Exact match on the fourcc, else the first format listed.
/// `None` only for an empty table.
pub fn find_best_format(
    formats: &[FormatDescriptor],
    pixel_format: u32,
) -> Option<&FormatDescriptor> {
    formats
        .iter()
        .find(|f| f.pixel_format == pixel_format)
        .or_else(|| formats.first())
}

/// Exact match on the dimensions, else the size with the smallest
/// `|dw| + |dh|`, the earliest one winning ties.
/// `None` only for an empty table.
pub fn find_best_frame_size(
    frame_sizes: &[FrameSizeDescriptor],
    width: u32,
    height: u32,
) -> Option<&FrameSizeDescriptor> {
    let mut best: Option<(&FrameSizeDescriptor, u64)> = None;
    for fs in frame_sizes {
        if fs.width == width && fs.height == height {
            return Some(fs);
        }
        let dist = u64::from(abs_diff(fs.width, width))
            + u64::from(abs_diff(fs.height, height));
        match best {
            Some((_, min_dist)) if dist >= min_dist => {}
            _ => best = Some((fs, dist)),
        }
    }
    best.map(|(fs, _)| fs)
}

fn abs_diff(a: u32, b: u32) -> u32 {
    if a > b {
        a - b
    } else {
        b - a
    }
}

impl<I2C, D> Mt9m114<I2C, D> {
    /// Supported pixel formats
    pub fn formats(&self) -> &'static [FormatDescriptor] {
        self.config.tables.formats
    }

    /// Supported frame sizes
    pub fn frame_sizes(&self) -> &'static [FrameSizeDescriptor] {
        self.config.tables.frame_sizes
    }

    /// The frame size with exactly these dimensions, whose `intervals()`
    /// lists the frame intervals available at that size
    pub fn frame_size(
        &self,
        width: u32,
        height: u32,
    ) -> Option<&'static FrameSizeDescriptor> {
        self.frame_sizes()
            .iter()
            .find(|fs| fs.width == width && fs.height == height)
    }

    pub fn crop_bounds(&self) -> CropWindow {
        CROP_BOUNDS
    }
}

impl<I2C, D, CommE> Mt9m114<I2C, D>
where
    I2C: Write<Error = CommE> + WriteRead<Error = CommE>,
    D: DelayMs<u32>,
{
    /// Program the registers of `format`.
    /// Takes effect only after `change_config`.
    pub fn set_format(
        &mut self,
        format: &'static FormatDescriptor,
    ) -> Result<(), crate::Error<CommE>> {
        self.session()?;
        self.write_table(format.regs)?;
        vdebug!(self, "format set to {}", format.description);
        self.session_mut()?.format = format;
        Ok(())
    }

    /// Program the registers of `frame_size`.
    /// Takes effect only after `change_config`.
    pub fn set_frame_size(
        &mut self,
        frame_size: &'static FrameSizeDescriptor,
    ) -> Result<(), crate::Error<CommE>> {
        self.session()?;
        self.write_table(frame_size.regs)?;
        vdebug!(
            self,
            "frame size set to {}x{}",
            frame_size.width,
            frame_size.height
        );
        self.session_mut()?.frame_size = frame_size;
        Ok(())
    }

    /// Program the AE frame rate limits and, with AE disabled, the manual
    /// frame interval. A vertical blanking wait should follow.
    pub fn set_frame_interval(
        &mut self,
        interval: FrameInterval,
    ) -> Result<(), crate::Error<CommE>> {
        let ae_enabled = self.session()?.ae_enabled;
        let chip_frame_rate = interval.to_chip_frame_rate();
        let chip_frame_interval = interval.to_chip_frame_interval();
        let (chip_frame_rate, chip_frame_interval) =
            match (chip_frame_rate, chip_frame_interval) {
                (Some(rate), Some(fi)) => (rate, fi),
                _ => {
                    error!(
                        "unusable frame interval {}/{}",
                        interval.numerator, interval.denominator
                    );
                    return Err(Error::InvalidArgument);
                }
            };

        self.write_u16(var::CAM_AET_MAX_FRAME_RATE, chip_frame_rate)?;
        self.write_u16(var::CAM_AET_MIN_FRAME_RATE, chip_frame_rate)?;
        self.wait_for_vertical_blanking()?;
        self.change_config()?;

        // keep the UVC mirror coherent
        if !ae_enabled {
            info!("setting uvc frame interval to {}", chip_frame_interval);
            self.write_u32(var::UVC_FRAME_INTERVAL_CONTROL, chip_frame_interval)?;
            self.wait_for_vertical_blanking()?;
            match self.firmware_status(var::UVC_RESULT_STATUS)? {
                FirmwareError::Busy => {
                    warn!("uvc result status is busy: auto exposure is still enabled")
                }
                FirmwareError::Range => {
                    warn!("uvc result status is range: frame rate was clamped")
                }
                _ => {}
            }
        }

        self.session_mut()?.frame_interval = interval;
        Ok(())
    }

    /// Switch to one of the intervals listed for the current frame size
    /// and wait for it to take effect
    pub fn select_frame_interval(
        &mut self,
        interval: FrameInterval,
    ) -> Result<(), crate::Error<CommE>> {
        let frame_size = self.session()?.frame_size;
        if interval.numerator == 0
            || interval.denominator == 0
            || !frame_size.supports(interval)
        {
            error!(
                "requested frame interval is illegal: {}/{}",
                interval.numerator, interval.denominator
            );
            return Err(Error::InvalidArgument);
        }
        vdebug!(
            self,
            "set frame interval: {}/{}",
            interval.numerator,
            interval.denominator
        );
        self.set_frame_interval(interval)?;
        self.wait_for_vertical_blanking()
    }

    pub fn current_frame_interval(
        &self,
    ) -> Result<FrameInterval, crate::Error<CommE>> {
        Ok(self.session()?.frame_interval)
    }

    /// Layout that `configure` would pick for this request; no bus access
    pub fn try_format(
        &self,
        pixel_format: u32,
        width: u32,
        height: u32,
    ) -> Result<PixFormat, crate::Error<CommE>> {
        let tables = self.config.tables;
        let format = find_best_format(tables.formats, pixel_format)
            .ok_or(Error::InvalidArgument)?;
        let frame_size = find_best_frame_size(tables.frame_sizes, width, height)
            .ok_or(Error::InvalidArgument)?;
        Ok(PixFormat::of(format, frame_size))
    }

    /// Select the closest supported format and frame size and apply them
    pub fn configure(
        &mut self,
        pixel_format: u32,
        width: u32,
        height: u32,
    ) -> Result<PixFormat, crate::Error<CommE>> {
        self.session()?;
        vdebug!(self, "requested format {}x{}", width, height);

        let tables = self.config.tables;
        let format = find_best_format(tables.formats, pixel_format)
            .ok_or(Error::InvalidArgument)?;
        let frame_size = find_best_frame_size(tables.frame_sizes, width, height)
            .ok_or(Error::InvalidArgument)?;

        self.set_format(format)?;
        self.set_frame_size(frame_size)?;
        self.change_config()?;

        let pix = PixFormat::of(format, frame_size);
        info!("set format {}x{}", pix.width, pix.height);
        Ok(pix)
    }

    pub fn current_format(&self) -> Result<PixFormat, crate::Error<CommE>> {
        let session = self.session()?;
        Ok(PixFormat::of(session.format, session.frame_size))
    }

    /// Crop window the firmware currently uses
    pub fn crop_window(&mut self) -> Result<CropWindow, crate::Error<CommE>> {
        self.session()?;
        Ok(CropWindow {
            left: self.read_u16(var::CAM_CROP_WINDOW_XOFFSET)?,
            top: self.read_u16(var::CAM_CROP_WINDOW_YOFFSET)?,
            width: self.read_u16(var::CAM_CROP_WINDOW_WIDTH)?,
            height: self.read_u16(var::CAM_CROP_WINDOW_HEIGHT)?,
        })
    }

    /// AE maximum frame rate as programmed, in 8.8 fixed point
    pub fn chip_frame_rate(&mut self) -> Result<u16, crate::Error<CommE>> {
        self.session()?;
        self.read_u16(var::CAM_AET_MAX_FRAME_RATE)
    }
}
