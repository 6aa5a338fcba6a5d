//! # Hosted simulator
//!
//! Renders a typical QEMU `pc` machine boot description into an in-memory
//! 80×25 screen and dumps it to stdout. Log records go to stderr.

use kernel_console::{Console, MemoryTextBuffer};
use kernel_info::boot::{BootInfo, ColorChannel, GraphicsInfo, MemoryMap, MemoryRegion, RegionKind};
use kernel_info::layout::{VGA_HEIGHT, VGA_WIDTH};
use kernel_report::BootReport;
use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn sample_boot_info() -> BootInfo {
    BootInfo {
        memmap: MemoryMap::from_regions(
            &[
                MemoryRegion::new(0x0000_0000, 0x0009_FC00, RegionKind::USABLE),
                MemoryRegion::new(0x0009_FC00, 0x0000_0400, RegionKind::RESERVED),
                MemoryRegion::new(0x000F_0000, 0x0001_0000, RegionKind::RESERVED),
                MemoryRegion::new(0x0010_0000, 0x07EE_0000, RegionKind::USABLE),
                MemoryRegion::new(0x07FE_0000, 0x0002_0000, RegionKind::RESERVED),
                MemoryRegion::new(0xFEFF_C000, 0x0000_4000, RegionKind::RESERVED),
                MemoryRegion::new(0xFFFC_0000, 0x0004_0000, RegionKind::RESERVED),
            ],
            0x0120_0000,
        ),
    }
}

const SAMPLE_GRAPHICS: GraphicsInfo = GraphicsInfo {
    enabled: 1,
    width: 1024,
    height: 768,
    bpp: 32,
    framebuffer: 0xFD00_0000,
    pitch: 4096,
    red: ColorChannel::new(8, 16),
    green: ColorChannel::new(8, 8),
    blue: ColorChannel::new(8, 0),
};

pub fn run() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }

    let boot_info = sample_boot_info();
    let graphics = SAMPLE_GRAPHICS;

    let screen = MemoryTextBuffer::<VGA_WIDTH, VGA_HEIGHT>::new();
    let mut report = BootReport::new(Console::new(screen));
    let stage = report.run(Ok(&boot_info), Some(&graphics));
    log::debug!("report finished in stage {stage:?}");

    let console = report.into_console();
    let border = "-".repeat(VGA_WIDTH);
    println!("+{border}+");
    for row in 0..VGA_HEIGHT {
        let bytes = console.buffer().row_bytes(row);
        let text: String = bytes
            .iter()
            .map(|&b| if b.is_ascii_graphic() { char::from(b) } else { ' ' })
            .collect();
        println!("|{text}|");
    }
    println!("+{border}+");
}
