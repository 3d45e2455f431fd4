/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Simulated sensor firmware behind the embedded-hal i2c traits

#![allow(dead_code)]

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c::{Write, WriteRead};
use mt9m114_i2c::registers::{reg, var, HOST_COMMAND_OK, MT9M114_CHIP_ID};
use mt9m114_i2c::{HostCommand, SystemState, DEFAULT_I2C_ADDRESS};

/// Bus error returned for NACKs and injected faults
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusFault;

const UVC_MANUAL_EXPOSURE: u8 = 0x01;
const STATUS_BUSY: u8 = 0x09;
const STATUS_BAD_FILE: u8 = 0x05;

pub struct FakeSensor {
    address: u8,
    memory: Vec<u8>,
    /// Address and payload of every write, commands included
    pub writes: Vec<(u16, Vec<u8>)>,
    pub commands: Vec<HostCommand>,
    pub patches_applied: usize,
    /// Reject ApplyPatch with a bad file status
    pub reject_patches: bool,
    /// Fail any write that touches this address
    pub fail_write_at: Option<u16>,
    /// UVC frame interval the firmware falls back to when AE is disabled
    pub auto_frame_interval: Option<u32>,
}

impl FakeSensor {
    pub fn new() -> Self {
        let mut fake = Self {
            address: DEFAULT_I2C_ADDRESS,
            memory: vec![0; 0x1_0000],
            writes: Vec::new(),
            commands: Vec::new(),
            patches_applied: 0,
            reject_patches: false,
            fail_write_at: None,
            auto_frame_interval: None,
        };
        fake.poke16(reg::CHIP_ID, MT9M114_CHIP_ID);
        fake.poke16(var::MON_MAJOR_VERSION, 5);
        fake.poke16(var::MON_MINOR_VERSION, 3);
        fake.poke16(var::MON_RELEASE_VERSION, 0x0202);
        fake.poke16(reg::CUSTOMER_REV, 0x0011);
        fake.poke16(reg::RESET_AND_MISC_CONTROL, 0x0230);
        fake.poke8(var::SYSMGR_CURRENT_STATE, SystemState::Suspended as u8);
        fake.poke8(var::UVC_AE_MODE_CONTROL, 0x02);
        fake
    }

    pub fn peek8(&self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    pub fn peek16(&self, addr: u16) -> u16 {
        let a = addr as usize;
        u16::from_be_bytes([self.memory[a], self.memory[a + 1]])
    }

    pub fn peek32(&self, addr: u16) -> u32 {
        let a = addr as usize;
        u32::from_be_bytes([
            self.memory[a],
            self.memory[a + 1],
            self.memory[a + 2],
            self.memory[a + 3],
        ])
    }

    pub fn poke8(&mut self, addr: u16, val: u8) {
        self.memory[addr as usize] = val;
    }

    pub fn poke16(&mut self, addr: u16, val: u16) {
        self.store(addr, &val.to_be_bytes());
    }

    pub fn poke32(&mut self, addr: u16, val: u32) {
        self.store(addr, &val.to_be_bytes());
    }

    pub fn system_state(&self) -> u8 {
        self.peek8(var::SYSMGR_CURRENT_STATE)
    }

    pub fn count(&self, command: HostCommand) -> usize {
        self.commands.iter().filter(|c| **c == command).count()
    }

    fn store(&mut self, addr: u16, data: &[u8]) {
        for (i, b) in data.iter().enumerate() {
            self.memory[addr.wrapping_add(i as u16) as usize] = *b;
        }
    }

    fn ae_manual(&self) -> bool {
        self.peek8(var::UVC_AE_MODE_CONTROL) == UVC_MANUAL_EXPOSURE
    }

    /// Variables that AE owns while it runs
    fn uvc_status_for(&self, addr: u16) -> u8 {
        let ae_owned = addr == var::UVC_EXPOSURE_TIME_ABSOLUTE_CONTROL
            || addr == var::UVC_GAIN_CONTROL
            || addr == var::UVC_FRAME_INTERVAL_CONTROL;
        if ae_owned && !self.ae_manual() {
            STATUS_BUSY
        } else {
            0
        }
    }

    fn on_write(&mut self, addr: u16, data: &[u8]) {
        if addr == reg::COMMAND_REGISTER && data.len() == 2 {
            let val = u16::from_be_bytes([data[0], data[1]]);
            self.run_command(val);
            return;
        }

        let was_manual = self.ae_manual();
        self.store(addr, data);

        if addr == var::UVC_AE_MODE_CONTROL && !was_manual && self.ae_manual() {
            if let Some(fi) = self.auto_frame_interval {
                self.poke32(var::UVC_FRAME_INTERVAL_CONTROL, fi);
            }
        }
        if (var::UVC_AE_MODE_CONTROL..var::UVC_RESULT_STATUS).contains(&addr) {
            let status = self.uvc_status_for(addr);
            self.poke8(var::UVC_RESULT_STATUS, status);
        }
    }

    fn run_command(&mut self, val: u16) {
        let command = match val & !HOST_COMMAND_OK {
            0x0001 => HostCommand::ApplyPatch,
            0x0002 => HostCommand::SetState,
            0x0004 => HostCommand::Refresh,
            _ => HostCommand::WaitForEvent,
        };
        self.commands.push(command);

        let ok = match command {
            HostCommand::SetState => {
                let next = self.peek8(var::SYSMGR_NEXT_STATE);
                let current = match SystemState::from_raw(next) {
                    Some(SystemState::ConfigChangePending)
                    | Some(SystemState::EnterStreaming)
                    | Some(SystemState::LeaveStandby) => SystemState::Streaming,
                    Some(SystemState::SuspendPending) => SystemState::Suspended,
                    Some(SystemState::StandbyPending) => SystemState::Standby,
                    _ => {
                        // invalid argument
                        self.poke8(var::SYSMGR_CURRENT_STATE, 0x0C);
                        self.poke16(reg::COMMAND_REGISTER, 0x0000);
                        return;
                    }
                };
                self.poke8(var::SYSMGR_CURRENT_STATE, current as u8);
                true
            }
            HostCommand::ApplyPatch => {
                if self.reject_patches {
                    self.poke8(var::PATCHLDR_APPLY_STATUS, STATUS_BAD_FILE);
                    false
                } else {
                    self.patches_applied += 1;
                    self.poke8(var::PATCHLDR_APPLY_STATUS, 0);
                    true
                }
            }
            HostCommand::Refresh | HostCommand::WaitForEvent => true,
        };

        let result = if ok { HOST_COMMAND_OK } else { 0x0000 };
        self.poke16(reg::COMMAND_REGISTER, result);
    }
}

impl Write for FakeSensor {
    type Error = BusFault;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        if address != self.address || bytes.len() < 2 {
            return Err(BusFault);
        }
        let addr = u16::from_be_bytes([bytes[0], bytes[1]]);
        let data = &bytes[2..];
        if let Some(bad) = self.fail_write_at {
            let start = u32::from(addr);
            let end = start + data.len().max(1) as u32;
            if (start..end).contains(&u32::from(bad)) {
                return Err(BusFault);
            }
        }
        self.writes.push((addr, data.to_vec()));
        self.on_write(addr, data);
        Ok(())
    }
}

impl WriteRead for FakeSensor {
    type Error = BusFault;

    fn write_read(
        &mut self,
        address: u8,
        bytes: &[u8],
        buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        if address != self.address || bytes.len() != 2 {
            return Err(BusFault);
        }
        let addr = u16::from_be_bytes([bytes[0], bytes[1]]);
        for (i, b) in buffer.iter_mut().enumerate() {
            *b = self.memory[addr.wrapping_add(i as u16) as usize];
        }
        Ok(())
    }
}

/// Delay provider that only keeps score
#[derive(Default)]
pub struct CountingDelay {
    pub total_ms: u64,
    pub calls: usize,
}

impl DelayMs<u32> for CountingDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.total_ms += u64::from(ms);
        self.calls += 1;
    }
}
