//! # Boot report sequencing
//!
//! ```text
//! Start ──(boot info present)──▶ Validated ──▶ Reporting ──▶ Halted
//!   │                                                          ▲
//!   └──────────────(boot info missing, no output)──────────────┘
//! ```

use crate::{report_graphics_info, report_memory_map};
use kernel_console::{ColorCode, Console, TextBuffer};
use kernel_info::BootInfoError;
use kernel_info::boot::{BootInfo, GraphicsInfo};
use log::{debug, info, warn};

const COLOR: ColorCode = ColorCode::DEFAULT;

/// Progress of the boot report.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Stage {
    /// Nothing inspected yet.
    Start,
    /// Boot information is present.
    Validated,
    /// The console is owned and being written.
    Reporting,
    /// Terminal; nothing further happens.
    Halted,
}

/// Where the kernel idles once the report is done.
pub trait Platform {
    /// Stop doing work, forever.
    fn halt(&mut self) -> !;
}

/// One-shot report of the boot information onto a console.
pub struct BootReport<B: TextBuffer> {
    console: Console<B>,
    stage: Stage,
}

impl<B: TextBuffer> BootReport<B> {
    #[must_use]
    pub const fn new(console: Console<B>) -> Self {
        Self {
            console,
            stage: Stage::Start,
        }
    }

    #[inline]
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    #[inline]
    #[must_use]
    pub const fn console(&self) -> &Console<B> {
        &self.console
    }

    #[must_use]
    pub fn into_console(self) -> Console<B> {
        self.console
    }

    /// Run the report to completion and return the final [`Stage`].
    ///
    /// Without boot information the console is not touched at all. The
    /// report runs at most once; later calls return the terminal stage.
    pub fn run(
        &mut self,
        boot_info: Result<&BootInfo, BootInfoError>,
        graphics: Option<&GraphicsInfo>,
    ) -> Stage {
        if self.stage != Stage::Start {
            return self.stage;
        }

        let boot_info = match boot_info {
            Ok(boot_info) => boot_info,
            Err(err) => {
                warn!("{err}; halting without report");
                self.stage = Stage::Halted;
                return self.stage;
            }
        };
        self.stage = Stage::Validated;
        debug!(
            "boot info at {:p}, {} memory map entries",
            core::ptr::from_ref(boot_info),
            boot_info.memory_map().len()
        );

        self.stage = Stage::Reporting;
        self.report(boot_info, graphics);

        self.stage = Stage::Halted;
        info!("boot report complete");
        self.stage
    }

    fn report(&mut self, boot_info: &BootInfo, graphics: Option<&GraphicsInfo>) {
        let console = &mut self.console;
        console.clear(COLOR);

        console.print("binfo at: ", COLOR);
        console.print_hex(core::ptr::from_ref(boot_info) as usize as u64, COLOR);
        console.print("\n", COLOR);

        let map = boot_info.memory_map();
        report_memory_map(console, map);

        console.print("\nVerifying graphics info...\n", COLOR);
        report_graphics_info(console, graphics);

        console.print("KASLR offset: ", COLOR);
        console.print_hex(map.kaslr_offset(), COLOR);
    }
}

/// Kernel-side entry: decode the bootloader's pointers, report, halt.
///
/// # Safety
/// Each pointer must be null or satisfy the requirements of
/// [`BootInfo::from_ptr`] and [`GraphicsInfo::from_ptr`] respectively.
pub unsafe fn enter<B: TextBuffer, P: Platform>(
    console: Console<B>,
    platform: &mut P,
    boot_info: *const BootInfo,
    graphics: *const GraphicsInfo,
) -> ! {
    // SAFETY: forwarded to the caller.
    let boot_info = unsafe { BootInfo::from_ptr(boot_info) };
    // SAFETY: forwarded to the caller.
    let graphics = unsafe { GraphicsInfo::from_ptr(graphics) };

    let mut report = BootReport::new(console);
    report.run(boot_info, graphics);
    platform.halt()
}
