/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Firmware system state transitions

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c::{Write, WriteRead};
use log::{error, info};

use crate::registers::{var, HostCommand, SystemState};
use crate::{Error, Mt9m114};

/// Event id the command handler waits on for the start of vertical blanking
const EVENT_VERTICAL_BLANKING: u16 = 0x0002;

impl<I2C, D, CommE> Mt9m114<I2C, D>
where
    I2C: Write<Error = CommE> + WriteRead<Error = CommE>,
    D: DelayMs<u32>,
{
    /// Request `target` as the next system state
    pub fn set_system_state(
        &mut self,
        target: SystemState,
    ) -> Result<(), crate::Error<CommE>> {
        self.ensure_determinate()?;
        self.write_u8(var::SYSMGR_NEXT_STATE, target as u8)?;
        self.issue_command(HostCommand::SetState)
    }

    /// Raw current system state. Values outside `SystemState` occur while
    /// the firmware reports an error through the same variable.
    pub fn system_state_raw(&mut self) -> Result<u8, crate::Error<CommE>> {
        self.ensure_determinate()?;
        self.read_u8(var::SYSMGR_CURRENT_STATE)
    }

    pub fn system_state(
        &mut self,
    ) -> Result<Option<SystemState>, crate::Error<CommE>> {
        self.system_state_raw().map(SystemState::from_raw)
    }

    /// Apply pending CAM variable writes.
    /// The UVC variables are not resynchronized, so a UVC control may read
    /// back a value that no longer matches what the sensor does.
    pub fn change_config(&mut self) -> Result<(), crate::Error<CommE>> {
        match self.set_system_state(SystemState::ConfigChangePending) {
            Ok(()) => {
                vdebug!(self, "change config succeeded");
                Ok(())
            }
            Err(e) => {
                error!("change config failed");
                Err(e)
            }
        }
    }

    /// Apply pending UVC variable writes at the next frame boundary
    pub fn refresh(&mut self) -> Result<(), crate::Error<CommE>> {
        match self.issue_command(HostCommand::Refresh) {
            Ok(()) => {
                vdebug!(self, "refresh succeeded");
                Ok(())
            }
            Err(e) => {
                error!("refresh failed");
                Err(e)
            }
        }
    }

    /// Block until the firmware reports the start of the next vertical blank
    pub fn wait_for_vertical_blanking(
        &mut self,
    ) -> Result<(), crate::Error<CommE>> {
        self.ensure_determinate()?;
        self.write_u16(var::CMD_HANDLER_WAIT_EVENT_ID, EVENT_VERTICAL_BLANKING)?;
        self.write_u16(var::CMD_HANDLER_NUM_EVENTS, 0x0001)?;
        self.issue_command(HostCommand::WaitForEvent).map_err(|e| {
            error!("waiting for vertical blanking failed");
            e
        })
    }

    fn set_streaming(&mut self) -> Result<(), crate::Error<CommE>> {
        self.set_system_state(SystemState::EnterStreaming)?;
        info!("changed state to streaming");
        Ok(())
    }

    fn set_suspend(&mut self) -> Result<(), crate::Error<CommE>> {
        self.set_system_state(SystemState::SuspendPending)?;
        info!("changed state to suspend");
        Ok(())
    }

    /// Start or stop streaming.
    /// Only Suspended -> Streaming and Streaming -> Suspended are legal;
    /// asking for the state the firmware is already in does nothing.
    pub fn set_stream_enabled(
        &mut self,
        enable: bool,
    ) -> Result<(), crate::Error<CommE>> {
        self.session()?;
        let raw = self.system_state_raw()?;
        match (enable, SystemState::from_raw(raw)) {
            (true, Some(SystemState::Suspended)) => self.set_streaming(),
            (false, Some(SystemState::Streaming)) => self.set_suspend(),
            (true, Some(SystemState::Streaming))
            | (false, Some(SystemState::Suspended)) => Ok(()),
            _ => {
                error!("chip is in an unsupported state {:#04x}", raw);
                Err(Error::ProtocolFault(raw))
            }
        }
    }
}
