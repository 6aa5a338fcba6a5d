//! # Bare-metal entry, halt and panic

use core::panic::PanicInfo;
use kernel_console::{Console, VgaTextBuffer};
use kernel_info::boot::{BootInfo, GraphicsInfo, KernelEntryFn};
use kernel_qemu::qemu_trace;
use kernel_report::{Platform, enter};

#[cfg(feature = "qemu")]
static LOGGER: kernel_qemu::QemuLogger = kernel_qemu::QemuLogger::new(log::LevelFilter::Debug);

const _: KernelEntryFn = kernel_main;

/// The kernel entry point.
///
/// # Bootloader Interaction
/// The bootloader jumps here with interrupts disabled, in long mode, with
/// the low memory (including the VGA text buffer at `0xB8000`) identity
/// mapped.
///
/// # ABI
/// C calling convention: `boot_info` in `RDI` (required), `graphics` in
/// `RSI` (may be null). Never returns.
#[unsafe(no_mangle)]
#[unsafe(link_section = ".text.kernel_main")]
pub extern "C" fn kernel_main(boot_info: *const BootInfo, graphics: *const GraphicsInfo) -> ! {
    qemu_trace!("Kernel reporting to QEMU!\n");
    init_logging();

    // SAFETY: this stage is the only user of the text buffer.
    let console = Console::new(unsafe { VgaTextBuffer::legacy() });

    // SAFETY: the bootloader hands over null or valid, immutable records.
    unsafe { enter(console, &mut Cpu, boot_info, graphics) }
}

/// The boot CPU.
struct Cpu;

impl Platform for Cpu {
    fn halt(&mut self) -> ! {
        idle()
    }
}

#[cfg(feature = "qemu")]
fn init_logging() {
    if LOGGER.install().is_err() {
        qemu_trace!("logger already installed\n");
    }
}

#[cfg(not(feature = "qemu"))]
const fn init_logging() {}

fn idle() -> ! {
    loop {
        wait_for_interrupt();
    }
}

#[cfg(target_arch = "x86_64")]
#[inline]
fn wait_for_interrupt() {
    // SAFETY: `hlt` only pauses until the next interrupt; none are armed.
    unsafe {
        core::arch::asm!("hlt", options(nomem, nostack, preserves_flags));
    }
}

#[cfg(not(target_arch = "x86_64"))]
#[inline]
fn wait_for_interrupt() {
    core::hint::spin_loop();
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    qemu_trace!("\n*** KERNEL PANIC ***\n{info}\n");
    idle()
}
