//! # Memory map report

use kernel_console::{ColorCode, Console, TextBuffer};
use kernel_info::boot::{MemoryMap, RegionKind};
use log::{debug, info, trace, warn};

/// Display color of a region classification.
#[must_use]
pub const fn region_color(kind: RegionKind) -> ColorCode {
    match kind {
        RegionKind::Usable => ColorCode::GREEN,
        RegionKind::Reserved | RegionKind::BadMemory => ColorCode::RED,
        RegionKind::AcpiReclaimable | RegionKind::AcpiNvs => ColorCode::CYAN,
        RegionKind::Unknown(_) => ColorCode::DEFAULT,
    }
}

/// Print the entry count, then one line per non-empty region in stored
/// order:
///
/// ```text
/// 0x1000 - 0x1FFF | Usable
/// ```
///
/// The count line shows the raw `entry_count`; iteration never goes beyond
/// the map's fixed capacity.
pub fn report_memory_map<B: TextBuffer>(console: &mut Console<B>, map: &MemoryMap) {
    let raw_count = map.raw_entry_count();

    console.print("Memory map: ", ColorCode::DEFAULT);
    console.print_dec(u64::from(raw_count), ColorCode::DEFAULT);
    console.print(" entries\n", ColorCode::DEFAULT);

    if map.is_clamped() {
        warn!(
            "memory map claims {raw_count} entries, only {} fit; ignoring the rest",
            map.len()
        );
    }

    let mut shown = 0usize;
    for (index, region) in map.regions().enumerate() {
        let Some(end) = region.end() else {
            trace!("skipping empty region #{index}");
            continue;
        };

        let kind = region.kind();
        trace!(
            "region #{index}: {:#x}..={end:#x} {kind:?} (acpi {:#x})",
            region.base(),
            region.acpi()
        );

        console.print_hex(region.base(), ColorCode::DEFAULT);
        console.print(" - ", ColorCode::DEFAULT);
        console.print_hex(end, ColorCode::DEFAULT);
        console.print(" | ", ColorCode::DEFAULT);
        console.print(kind.label(), region_color(kind));
        console.print("\n", ColorCode::DEFAULT);
        shown += 1;
    }

    debug!("memory map: {shown} of {} regions shown", map.len());
    info!("usable memory: {} bytes", map.usable_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel_console::{MemoryTextBuffer, ScreenChar};
    use kernel_info::boot::MemoryRegion;

    type Screen = Console<MemoryTextBuffer<80, 25>>;

    fn screen() -> Screen {
        let mut console = Console::new(MemoryTextBuffer::new());
        console.clear(ColorCode::DEFAULT);
        console
    }

    fn line(console: &Screen, row: usize) -> String {
        String::from_utf8_lossy(&console.buffer().row_bytes(row))
            .trim_end()
            .to_owned()
    }

    #[test]
    fn skips_empty_regions() {
        let map = MemoryMap::from_regions(
            &[
                MemoryRegion::new(0, 0, 1),
                MemoryRegion::new(0x1000, 0x1000, 1),
                MemoryRegion::new(0x2000, 0, 5),
            ],
            0,
        );

        let mut console = screen();
        report_memory_map(&mut console, &map);

        assert_eq!(line(&console, 0), "Memory map: 3 entries");
        assert_eq!(line(&console, 1), "0x1000 - 0x1FFF | Usable");
        assert_eq!(line(&console, 2), "");
        assert_eq!(console.cursor(), (2, 0));
    }

    #[test]
    fn labels_carry_classification_colors() {
        let map = MemoryMap::from_regions(
            &[
                MemoryRegion::new(0x0, 0x1000, 1),
                MemoryRegion::new(0x1000, 0x1000, 2),
                MemoryRegion::new(0x2000, 0x1000, 3),
                MemoryRegion::new(0x3000, 0x1000, 4),
                MemoryRegion::new(0x4000, 0x1000, 5),
                MemoryRegion::new(0x5000, 0x1000, 42),
            ],
            0,
        );

        let mut console = screen();
        report_memory_map(&mut console, &map);

        let expected = [
            ("Usable", ColorCode::GREEN),
            ("Reserved", ColorCode::RED),
            ("ACPI Reclaim", ColorCode::CYAN),
            ("ACPI NVS", ColorCode::CYAN),
            ("Bad Memory", ColorCode::RED),
            ("Unknown", ColorCode::DEFAULT),
        ];
        for (i, (label, color)) in expected.into_iter().enumerate() {
            let row = i + 1;
            let text = line(&console, row);
            let column = text.find(" | ").expect("separator") + 3;
            assert_eq!(&text[column..], label);
            assert_eq!(
                console.buffer().cell(row, column),
                ScreenChar::glyph(label.as_bytes()[0], color)
            );
            assert_eq!(console.buffer().cell(row, 0).color(), ColorCode::DEFAULT);
        }
    }

    #[test]
    fn keeps_stored_order_and_overlaps() {
        let map = MemoryMap::from_regions(
            &[
                MemoryRegion::new(0x10_0000, 0x10_0000, 1),
                MemoryRegion::new(0, 0x9_FC00, 1),
                MemoryRegion::new(0x10_0000, 0x10_0000, 1),
            ],
            0,
        );

        let mut console = screen();
        report_memory_map(&mut console, &map);

        assert_eq!(line(&console, 1), "0x100000 - 0x1FFFFF | Usable");
        assert_eq!(line(&console, 2), "0x0 - 0x9FBFF | Usable");
        assert_eq!(line(&console, 3), "0x100000 - 0x1FFFFF | Usable");
    }

    #[test]
    fn corrupt_entry_count_is_clamped() {
        let mut map = MemoryMap::EMPTY;
        for (i, slot) in map.entries.iter_mut().enumerate() {
            *slot = MemoryRegion::new(i as u64 * 0x1000, 0x1000, 2);
        }
        map.entry_count = 1000;

        let mut console = Console::new(MemoryTextBuffer::<80, 100>::new());
        report_memory_map(&mut console, &map);

        let count = String::from_utf8_lossy(&console.buffer().row_bytes(0)).into_owned();
        assert!(count.starts_with("Memory map: 1000 entries"));

        let last = String::from_utf8_lossy(&console.buffer().row_bytes(64)).into_owned();
        assert!(last.starts_with("0x3F000 - 0x3FFFF | Reserved"), "{last}");
        assert_eq!(console.cursor(), (65, 0));
    }

    #[test]
    fn empty_map_prints_only_the_count() {
        let mut console = screen();
        report_memory_map(&mut console, &MemoryMap::EMPTY);

        assert_eq!(line(&console, 0), "Memory map: 0 entries");
        assert_eq!(console.cursor(), (1, 0));
    }
}
