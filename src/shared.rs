/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Driver handle that can be shared between contexts.
//!
//! Each call holds the lock for its whole bus sequence, so a control change
//! and its wait/refresh/status tail never interleave with another caller.

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c::{Write, WriteRead};
use spin::{Mutex, MutexGuard};

use crate::{
    ChipIdentity, Control, Error, FrameInterval, Mt9m114, PixFormat,
};

pub struct SharedMt9m114<I2C, D> {
    inner: Mutex<Mt9m114<I2C, D>>,
}

impl<I2C, D> SharedMt9m114<I2C, D> {
    pub fn new(driver: Mt9m114<I2C, D>) -> Self {
        Self {
            inner: Mutex::new(driver),
        }
    }

    /// Exclusive access for as long as the guard lives
    pub fn lock(&self) -> MutexGuard<'_, Mt9m114<I2C, D>> {
        self.inner.lock()
    }

    /// Run `f` with the driver locked
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut Mt9m114<I2C, D>) -> R,
    {
        let mut driver = self.inner.lock();
        f(&mut driver)
    }

    pub fn into_inner(self) -> Mt9m114<I2C, D> {
        self.inner.into_inner()
    }
}

impl<I2C, D, CommE> SharedMt9m114<I2C, D>
where
    I2C: Write<Error = CommE> + WriteRead<Error = CommE>,
    D: DelayMs<u32>,
{
    pub fn detect(&self) -> Result<ChipIdentity, Error<CommE>> {
        self.lock().detect()
    }

    pub fn initialize(&self) -> Result<(), Error<CommE>> {
        self.lock().initialize()
    }

    pub fn reset(&self) -> Result<(), Error<CommE>> {
        self.lock().reset()
    }

    pub fn get_control(&self, control: Control) -> Result<i32, Error<CommE>> {
        self.lock().get_control(control)
    }

    pub fn set_control(
        &self,
        control: Control,
        value: i32,
    ) -> Result<(), Error<CommE>> {
        self.lock().set_control(control, value)
    }

    pub fn configure(
        &self,
        pixel_format: u32,
        width: u32,
        height: u32,
    ) -> Result<PixFormat, Error<CommE>> {
        self.lock().configure(pixel_format, width, height)
    }

    pub fn select_frame_interval(
        &self,
        interval: FrameInterval,
    ) -> Result<(), Error<CommE>> {
        self.lock().select_frame_interval(interval)
    }

    pub fn set_stream_enabled(&self, enable: bool) -> Result<(), Error<CommE>> {
        self.lock().set_stream_enabled(enable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::HostCommand;
    use crate::registers::var;
    use crate::test_support::*;

    #[test]
    fn with_runs_a_sequence_under_one_lock() {
        let mut expectations = vec![write16(var::UVC_SATURATION_CONTROL, 100)];
        expectations.extend(wait_for_vertical_blanking());
        expectations.extend(command_ok(HostCommand::Refresh));
        expectations.push(read8(var::UVC_RESULT_STATUS, 0));
        expectations.push(read16(var::UVC_SATURATION_CONTROL, 100));

        let shared = SharedMt9m114::new(session_driver(&expectations, true));
        let readback = shared.with(|drv| {
            drv.set_control(Control::Saturation, 100)?;
            drv.get_control(Control::Saturation)
        });
        assert_eq!(readback, Ok(100));
        finish(shared.into_inner());
    }
}
