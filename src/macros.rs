/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

/// Debug-level trace that is only emitted when the driver was configured
/// with `Config::verbose`
macro_rules! vdebug {
    ($drv:expr, $($arg:tt)*) => {
        if $drv.config.verbose {
            log::debug!($($arg)*);
        }
    };
}
