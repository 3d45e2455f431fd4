/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Raw register access.
//!
//! Every transaction starts with the 16-bit register address, most
//! significant byte first, and every payload word is big-endian on the wire.
//! A read is an address write immediately followed by a read of the payload.

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c::{Write, WriteRead};
use log::error;

use crate::{Error, Mt9m114};

/// Data words per burst transaction, excluding the address header
pub const BURST_MAX_WORDS: usize = 63;

/// Access width of a register or firmware variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegWidth {
    U8,
    U16,
    U32,
}

impl RegWidth {
    /// Map a byte count to a width
    pub fn from_size(size: u8) -> Option<Self> {
        match size {
            1 => Some(RegWidth::U8),
            2 => Some(RegWidth::U16),
            4 => Some(RegWidth::U32),
            _ => None,
        }
    }

    pub fn size(self) -> usize {
        match self {
            RegWidth::U8 => 1,
            RegWidth::U16 => 2,
            RegWidth::U32 => 4,
        }
    }
}

/// One step of a static configuration table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterEntry {
    pub address: u16,
    pub width: RegWidth,
    pub value: u32,
}

impl RegisterEntry {
    /// Terminates a table; nothing at or after it is written
    pub const END: RegisterEntry = RegisterEntry {
        address: 0xFFFF,
        width: RegWidth::U32,
        value: 0xFFFF_FFFF,
    };

    pub const fn u8(address: u16, value: u8) -> Self {
        Self {
            address,
            width: RegWidth::U8,
            value: value as u32,
        }
    }

    pub const fn u16(address: u16, value: u16) -> Self {
        Self {
            address,
            width: RegWidth::U16,
            value: value as u32,
        }
    }

    pub const fn u32(address: u16, value: u32) -> Self {
        Self {
            address,
            width: RegWidth::U32,
            value,
        }
    }

    pub fn is_end(&self) -> bool {
        self.address == Self::END.address
    }
}

impl<I2C, D, CommE> Mt9m114<I2C, D>
where
    I2C: Write<Error = CommE> + WriteRead<Error = CommE>,
    D: DelayMs<u32>,
{
    fn read_bytes(
        &mut self,
        reg: u16,
        buf: &mut [u8],
    ) -> Result<(), crate::Error<CommE>> {
        let address = self.config.address;
        self.i2c
            .write_read(address, &reg.to_be_bytes(), buf)
            .map_err(|e| {
                error!("reading register {:#06x} failed", reg);
                Error::Comm(e)
            })
    }

    fn write_bytes(&mut self, buf: &[u8]) -> Result<(), crate::Error<CommE>> {
        let address = self.config.address;
        self.i2c.write(address, buf).map_err(|e| {
            error!(
                "writing register {:#06x} failed",
                u16::from_be_bytes([buf[0], buf[1]])
            );
            Error::Comm(e)
        })
    }

    /// Read a u8 from a 16-bit address
    pub(crate) fn read_u8(&mut self, reg: u16) -> Result<u8, crate::Error<CommE>> {
        let mut recv_buf = [0u8];
        self.read_bytes(reg, &mut recv_buf)?;
        Ok(recv_buf[0])
    }

    /// Read a u16 from a 16-bit address
    pub(crate) fn read_u16(&mut self, reg: u16) -> Result<u16, crate::Error<CommE>> {
        let mut recv_buf = [0u8; 2];
        self.read_bytes(reg, &mut recv_buf)?;
        Ok(u16::from_be_bytes(recv_buf))
    }

    /// Read a u32 from a 16-bit address
    pub(crate) fn read_u32(&mut self, reg: u16) -> Result<u32, crate::Error<CommE>> {
        let mut recv_buf = [0u8; 4];
        self.read_bytes(reg, &mut recv_buf)?;
        Ok(u32::from_be_bytes(recv_buf))
    }

    /// Write a u8 to a 16-bit address
    pub(crate) fn write_u8(
        &mut self,
        reg: u16,
        val: u8,
    ) -> Result<(), crate::Error<CommE>> {
        let r = reg.to_be_bytes();
        self.write_bytes(&[r[0], r[1], val])
    }

    /// Write a u16 to a 16-bit address
    pub(crate) fn write_u16(
        &mut self,
        reg: u16,
        val: u16,
    ) -> Result<(), crate::Error<CommE>> {
        let r = reg.to_be_bytes();
        let v = val.to_be_bytes();
        self.write_bytes(&[r[0], r[1], v[0], v[1]])
    }

    /// Write a u32 to a 16-bit address
    pub(crate) fn write_u32(
        &mut self,
        reg: u16,
        val: u32,
    ) -> Result<(), crate::Error<CommE>> {
        let r = reg.to_be_bytes();
        let v = val.to_be_bytes();
        self.write_bytes(&[r[0], r[1], v[0], v[1], v[2], v[3]])
    }

    /// Read a register of any width, zero-extended
    pub(crate) fn read(
        &mut self,
        reg: u16,
        width: RegWidth,
    ) -> Result<u32, crate::Error<CommE>> {
        match width {
            RegWidth::U8 => self.read_u8(reg).map(u32::from),
            RegWidth::U16 => self.read_u16(reg).map(u32::from),
            RegWidth::U32 => self.read_u32(reg),
        }
    }

    /// Write a register of any width; upper bits beyond the width are dropped
    pub(crate) fn write(
        &mut self,
        reg: u16,
        width: RegWidth,
        val: u32,
    ) -> Result<(), crate::Error<CommE>> {
        match width {
            RegWidth::U8 => self.write_u8(reg, val as u8),
            RegWidth::U16 => self.write_u16(reg, val as u16),
            RegWidth::U32 => self.write_u32(reg, val),
        }
    }

    /// Set the bits in `set`, then clear the bits in `clear`
    pub(crate) fn read_modify_write16(
        &mut self,
        reg: u16,
        set: u16,
        clear: u16,
    ) -> Result<(), crate::Error<CommE>> {
        let val = self.read_u16(reg)?;
        self.write_u16(reg, (val | set) & !clear)
    }

    /// Read `reg` until `(val & mask) == expected`, sleeping `delay_ms`
    /// after every miss. Gives up with `Timeout` after `attempts` reads.
    pub(crate) fn poll_u16(
        &mut self,
        reg: u16,
        mask: u16,
        expected: u16,
        delay_ms: u32,
        attempts: u32,
    ) -> Result<(), crate::Error<CommE>> {
        for _ in 0..attempts {
            let val = self.read_u16(reg)?;
            if val & mask == expected {
                return Ok(());
            }
            self.delay.delay_ms(delay_ms);
        }

        error!(
            "polling register {:#06x} with mask {:#06x} for {:#06x} timed out",
            reg, mask, expected
        );
        Err(Error::Timeout)
    }

    /// Write table entries in order up to the `RegisterEntry::END` marker,
    /// stopping at the first failure
    pub(crate) fn write_table(
        &mut self,
        entries: &[RegisterEntry],
    ) -> Result<(), crate::Error<CommE>> {
        for entry in entries.iter().take_while(|e| !e.is_end()) {
            self.write(entry.address, entry.width, entry.value)?;
        }
        Ok(())
    }

    /// Write consecutive words starting at `reg`.
    /// The words are split into transactions of at most `BURST_MAX_WORDS`,
    /// each addressed where the previous one stopped. Nothing is written
    /// after a failed transaction.
    pub(crate) fn burst_write(
        &mut self,
        reg: u16,
        words: &[u16],
    ) -> Result<(), crate::Error<CommE>> {
        let mut buf = [0u8; (BURST_MAX_WORDS + 1) * 2];
        let mut address = reg;

        for chunk in words.chunks(BURST_MAX_WORDS) {
            buf[..2].copy_from_slice(&address.to_be_bytes());
            for (i, word) in chunk.iter().enumerate() {
                buf[2 + 2 * i..4 + 2 * i].copy_from_slice(&word.to_be_bytes());
            }
            let len = 2 + 2 * chunk.len();

            let device = self.config.address;
            if let Err(e) = self.i2c.write(device, &buf[..len]) {
                error!("burst write failed after register {:#06x}", address);
                return Err(Error::Comm(e));
            }
            address = address.wrapping_add((2 * chunk.len()) as u16);
        }
        Ok(())
    }
}
