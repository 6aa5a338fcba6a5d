//! # Graphics information report

use kernel_console::{ColorCode, Console, TextBuffer};
use kernel_info::boot::{ColorChannel, GraphicsInfo};
use log::debug;

const COLOR: ColorCode = ColorCode::DEFAULT;

/// Print the framebuffer descriptor.
///
/// A missing descriptor prints a single "NULL" line; a disabled one prints
/// only its address and flag. The mode fields are read only when enabled.
pub fn report_graphics_info<B: TextBuffer>(console: &mut Console<B>, info: Option<&GraphicsInfo>) {
    let Some(info) = info else {
        debug!("no graphics info provided");
        console.print("Graphics info is NULL\n", COLOR);
        return;
    };

    console.print("Graphics info at: ", COLOR);
    console.print_hex(core::ptr::from_ref(info) as usize as u64, COLOR);
    console.print("\n", COLOR);

    console.print("Enabled: ", COLOR);
    console.print_dec(u64::from(info.enabled_flag()), COLOR);
    console.print("\n", COLOR);

    let Some(mode) = info.mode() else {
        debug!("graphics disabled");
        return;
    };

    debug!(
        "graphics {}x{}@{}bpp, fb {:#x}, pitch {}",
        mode.width, mode.height, mode.bpp, mode.framebuffer, mode.pitch
    );

    console.print("Resolution: ", COLOR);
    console.print_dec(u64::from(mode.width), COLOR);
    console.print("x", COLOR);
    console.print_dec(u64::from(mode.height), COLOR);
    console.print("\n", COLOR);

    console.print("Bits per pixel: ", COLOR);
    console.print_dec(u64::from(mode.bpp), COLOR);
    console.print("\n", COLOR);

    console.print("Framebuffer address: ", COLOR);
    console.print_hex(u64::from(mode.framebuffer), COLOR);
    console.print("\n", COLOR);

    console.print("Pitch (bytes per line): ", COLOR);
    console.print_dec(u64::from(mode.pitch), COLOR);
    console.print("\n", COLOR);

    console.print("Color info:\n", COLOR);
    print_channel(console, "  Red: ", mode.red);
    print_channel(console, "  Green: ", mode.green);
    print_channel(console, "  Blue: ", mode.blue);
}

fn print_channel<B: TextBuffer>(console: &mut Console<B>, name: &str, channel: ColorChannel) {
    console.print(name, COLOR);
    console.print_dec(u64::from(channel.mask_size), COLOR);
    console.print(" bits at position ", COLOR);
    console.print_dec(u64::from(channel.position), COLOR);
    console.print("\n", COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel_console::MemoryTextBuffer;

    type Screen = Console<MemoryTextBuffer<80, 25>>;

    fn render(info: Option<&GraphicsInfo>) -> (Screen, Vec<String>) {
        let mut console = Console::new(MemoryTextBuffer::new());
        console.clear(ColorCode::DEFAULT);
        report_graphics_info(&mut console, info);

        let lines = (0..25)
            .map(|row| {
                String::from_utf8_lossy(&console.buffer().row_bytes(row))
                    .trim_end()
                    .to_owned()
            })
            .collect();
        (console, lines)
    }

    fn address_of(info: &GraphicsInfo) -> String {
        format!("{:#X}", core::ptr::from_ref(info) as usize).replacen("0X", "0x", 1)
    }

    #[test]
    fn missing_info_is_reported_as_null() {
        let (console, lines) = render(None);

        assert_eq!(lines[0], "Graphics info is NULL");
        assert!(lines[1..].iter().all(String::is_empty));
        assert_eq!(console.cursor(), (1, 0));
    }

    #[test]
    fn disabled_info_shows_only_the_flag() {
        let info = GraphicsInfo {
            width: 1920,
            height: 1080,
            bpp: 32,
            pitch: 7680,
            ..GraphicsInfo::DISABLED
        };
        let (console, lines) = render(Some(&info));

        assert_eq!(lines[0], format!("Graphics info at: {}", address_of(&info)));
        assert_eq!(lines[1], "Enabled: 0");
        assert!(lines[2..].iter().all(String::is_empty));
        assert_eq!(console.cursor(), (2, 0));
    }

    #[test]
    fn enabled_info_shows_every_field() {
        let info = GraphicsInfo {
            enabled: 1,
            width: 800,
            height: 600,
            bpp: 32,
            framebuffer: 0xFD00_0000,
            pitch: 3200,
            red: ColorChannel::new(8, 16),
            green: ColorChannel::new(8, 8),
            blue: ColorChannel::new(8, 0),
        };
        let (console, lines) = render(Some(&info));

        assert_eq!(
            lines[..11],
            [
                format!("Graphics info at: {}", address_of(&info)),
                "Enabled: 1".to_owned(),
                "Resolution: 800x600".to_owned(),
                "Bits per pixel: 32".to_owned(),
                "Framebuffer address: 0xFD000000".to_owned(),
                "Pitch (bytes per line): 3200".to_owned(),
                "Color info:".to_owned(),
                "  Red: 8 bits at position 16".to_owned(),
                "  Green: 8 bits at position 8".to_owned(),
                "  Blue: 8 bits at position 0".to_owned(),
                String::new(),
            ]
        );
        assert_eq!(console.cursor(), (10, 0));
    }

    #[test]
    fn nonzero_flag_other_than_one_counts_as_enabled() {
        let info = GraphicsInfo {
            enabled: 2,
            width: 640,
            height: 480,
            ..GraphicsInfo::DISABLED
        };
        let (_, lines) = render(Some(&info));

        assert_eq!(lines[1], "Enabled: 2");
        assert_eq!(lines[2], "Resolution: 640x480");
    }
}
