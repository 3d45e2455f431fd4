/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Host command handshake.
//!
//! The firmware accepts a command when its bit in the command register is
//! clear. The host writes the bit together with `HOST_COMMAND_OK`; firmware
//! clears the bit when done and leaves OK set only on success. On failure the
//! reason lives in a status variable that depends on the command.

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c::{Write, WriteRead};
use log::error;

use crate::registers::{reg, var, FirmwareError, HostCommand, HOST_COMMAND_OK};
use crate::{Error, Mt9m114};

const COMMAND_POLL_DELAY_MS: u32 = 10;
const COMMAND_POLL_ATTEMPTS: u32 = 100;

/// Why the firmware refused a host command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandFailure {
    /// SetState: the requested state is not valid
    InvalidArgument,
    /// SetState: no room to queue the transition
    NoSpace,
    /// Refresh: crop window x outside the sensor array
    InvalidCropX,
    /// Refresh: crop window y outside the sensor array
    InvalidCropY,
    /// Refresh: timing chain cannot be realized
    InvalidTimingChain,
    /// ApplyPatch: the patch was rejected by the loader
    BadFirmwareFormat,
    /// Raw status, or 0 when the command has no status variable
    Unknown(u8),
}

impl CommandFailure {
    fn for_set_state(status: FirmwareError) -> Self {
        match status {
            FirmwareError::Invalid => CommandFailure::InvalidArgument,
            FirmwareError::NoSpace => CommandFailure::NoSpace,
            other => CommandFailure::Unknown(other.raw()),
        }
    }

    fn for_refresh(status: FirmwareError) -> Self {
        match status {
            FirmwareError::InvalidCropX => CommandFailure::InvalidCropX,
            FirmwareError::InvalidCropY => CommandFailure::InvalidCropY,
            FirmwareError::InvalidTimingChain => {
                CommandFailure::InvalidTimingChain
            }
            other => CommandFailure::Unknown(other.raw()),
        }
    }

    fn for_apply_patch(status: FirmwareError) -> Self {
        match status {
            FirmwareError::BadFile => CommandFailure::BadFirmwareFormat,
            other => CommandFailure::Unknown(other.raw()),
        }
    }
}

impl<I2C, D, CommE> Mt9m114<I2C, D>
where
    I2C: Write<Error = CommE> + WriteRead<Error = CommE>,
    D: DelayMs<u32>,
{
    fn wait_command_idle(
        &mut self,
        command: HostCommand,
    ) -> Result<(), crate::Error<CommE>> {
        self.poll_u16(
            reg::COMMAND_REGISTER,
            command as u16,
            0x0000,
            COMMAND_POLL_DELAY_MS,
            COMMAND_POLL_ATTEMPTS,
        )
    }

    /// Run the full handshake for `command` and translate a firmware
    /// rejection into the most specific reason available
    pub fn issue_command(
        &mut self,
        command: HostCommand,
    ) -> Result<(), crate::Error<CommE>> {
        self.ensure_determinate()?;
        // a busy firmware never sees the command
        self.wait_command_idle(command)?;
        self.write_u16(reg::COMMAND_REGISTER, command as u16 | HOST_COMMAND_OK)?;
        self.wait_command_idle(command)?;

        let result = self.read_u16(reg::COMMAND_REGISTER)?;
        if result & HOST_COMMAND_OK != 0 {
            vdebug!(self, "command {:?} succeeded", command);
            return Ok(());
        }

        let reason = self.command_failure(command)?;
        error!("command {:?} failed with {:?}", command, reason);
        Err(Error::CommandFailed { command, reason })
    }

    fn command_failure(
        &mut self,
        command: HostCommand,
    ) -> Result<CommandFailure, crate::Error<CommE>> {
        let reason = match command {
            // the current state variable doubles as the command status
            HostCommand::SetState => CommandFailure::for_set_state(
                self.firmware_status(var::SYSMGR_CURRENT_STATE)?,
            ),
            HostCommand::Refresh => CommandFailure::for_refresh(
                self.firmware_status(var::SEQ_ERROR_CODE)?,
            ),
            HostCommand::ApplyPatch => CommandFailure::for_apply_patch(
                self.firmware_status(var::PATCHLDR_APPLY_STATUS)?,
            ),
            HostCommand::WaitForEvent => CommandFailure::Unknown(0),
        };
        Ok(reason)
    }

    pub(crate) fn firmware_status(
        &mut self,
        status_var: u16,
    ) -> Result<FirmwareError, crate::Error<CommE>> {
        self.read_u8(status_var).map(FirmwareError::from_raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use embedded_hal_mock::i2c::Transaction;

    fn rejected(command: HostCommand) -> Vec<Transaction> {
        vec![
            read16(reg::COMMAND_REGISTER, 0x0000),
            write16(reg::COMMAND_REGISTER, command as u16 | HOST_COMMAND_OK),
            read16(reg::COMMAND_REGISTER, command as u16),
            read16(reg::COMMAND_REGISTER, 0x0000),
            read16(reg::COMMAND_REGISTER, 0x0000),
        ]
    }

    #[test]
    fn handshake_waits_for_busy_bit_on_both_sides() {
        let expectations = [
            read16(reg::COMMAND_REGISTER, 0x0004),
            read16(reg::COMMAND_REGISTER, 0x0000),
            write16(reg::COMMAND_REGISTER, 0x8004),
            read16(reg::COMMAND_REGISTER, 0x8004),
            read16(reg::COMMAND_REGISTER, 0x8000),
            read16(reg::COMMAND_REGISTER, 0x8000),
        ];
        let mut drv = driver(&expectations);
        drv.issue_command(HostCommand::Refresh).unwrap();
        finish(drv);
    }

    #[test]
    fn busy_firmware_times_out_before_issuing() {
        let expectations: Vec<Transaction> = (0..100)
            .map(|_| read16(reg::COMMAND_REGISTER, 0x0002))
            .collect();
        let mut drv = driver(&expectations);
        assert_eq!(drv.issue_command(HostCommand::SetState), Err(Error::Timeout));
        finish(drv);
    }

    #[test]
    fn set_state_rejection_reads_current_state() {
        let mut expectations = rejected(HostCommand::SetState);
        expectations.push(read8(var::SYSMGR_CURRENT_STATE, 0x0C));
        let mut drv = driver(&expectations);
        assert_eq!(
            drv.issue_command(HostCommand::SetState),
            Err(Error::CommandFailed {
                command: HostCommand::SetState,
                reason: CommandFailure::InvalidArgument,
            })
        );
        finish(drv);
    }

    #[test]
    fn set_state_unmapped_status_keeps_raw_code() {
        let mut expectations = rejected(HostCommand::SetState);
        expectations.push(read8(var::SYSMGR_CURRENT_STATE, 0x31));
        let mut drv = driver(&expectations);
        assert_eq!(
            drv.issue_command(HostCommand::SetState),
            Err(Error::CommandFailed {
                command: HostCommand::SetState,
                reason: CommandFailure::Unknown(0x31),
            })
        );
        finish(drv);
    }

    #[test]
    fn refresh_rejection_reads_sequencer_error() {
        let mut expectations = rejected(HostCommand::Refresh);
        expectations.push(read8(var::SEQ_ERROR_CODE, 0x14));
        let mut drv = driver(&expectations);
        assert_eq!(
            drv.issue_command(HostCommand::Refresh),
            Err(Error::CommandFailed {
                command: HostCommand::Refresh,
                reason: CommandFailure::InvalidCropY,
            })
        );
        finish(drv);
    }

    #[test]
    fn apply_patch_rejection_reads_loader_status() {
        let mut expectations = rejected(HostCommand::ApplyPatch);
        expectations.push(read8(var::PATCHLDR_APPLY_STATUS, 0x05));
        let mut drv = driver(&expectations);
        assert_eq!(
            drv.issue_command(HostCommand::ApplyPatch),
            Err(Error::CommandFailed {
                command: HostCommand::ApplyPatch,
                reason: CommandFailure::BadFirmwareFormat,
            })
        );
        finish(drv);
    }

    #[test]
    fn wait_event_rejection_is_generic() {
        let expectations = rejected(HostCommand::WaitForEvent);
        let mut drv = driver(&expectations);
        assert_eq!(
            drv.issue_command(HostCommand::WaitForEvent),
            Err(Error::CommandFailed {
                command: HostCommand::WaitForEvent,
                reason: CommandFailure::Unknown(0),
            })
        );
        finish(drv);
    }

    #[test]
    fn status_codes_map_per_command() {
        let cases = [
            (HostCommand::Refresh, var::SEQ_ERROR_CODE, 0x13, CommandFailure::InvalidCropX),
            (HostCommand::Refresh, var::SEQ_ERROR_CODE, 0x15, CommandFailure::InvalidTimingChain),
            (HostCommand::Refresh, var::SEQ_ERROR_CODE, 0x0C, CommandFailure::Unknown(0x0C)),
            (HostCommand::SetState, var::SYSMGR_CURRENT_STATE, 0x0D, CommandFailure::NoSpace),
            (HostCommand::ApplyPatch, var::PATCHLDR_APPLY_STATUS, 0x0C, CommandFailure::Unknown(0x0C)),
            (HostCommand::ApplyPatch, var::PATCHLDR_APPLY_STATUS, 0x42, CommandFailure::Unknown(0x42)),
        ];
        for (command, status_var, status, reason) in cases.iter() {
            let mut expectations = rejected(*command);
            expectations.push(read8(*status_var, *status));
            let mut drv = driver(&expectations);
            assert_eq!(
                drv.issue_command(*command),
                Err(Error::CommandFailed {
                    command: *command,
                    reason: *reason,
                })
            );
            finish(drv);
        }
    }
}
