//! USB HID keyboard device.
//!
//! Initialises the Embassy USB stack on the nRF52840 hardware USB
//! peripheral and exposes one HID keyboard endpoint. The device runner is
//! spawned as its own task; the [`UsbKeyboard`] handle stays with the menu
//! loop and talks to the runner through statics.

use core::sync::atomic::{AtomicBool, Ordering};

use embassy_futures::select::{select, Either};
use embassy_nrf::usb::vbus_detect::HardwareVbusDetect;
use embassy_nrf::usb::Driver;
use embassy_nrf::{self, bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{with_timeout, Duration};
use embassy_usb::class::hid::{Config as HidConfig, HidWriter, State};
use embassy_usb::{Builder, Config, UsbDevice};
use static_cell::StaticCell;

use crate::config;
use crate::error::Error;
use crate::hid::keyboard::{KeyboardReport, KEYBOARD_REPORT_DESCRIPTOR, KEYBOARD_REPORT_SIZE};
use crate::hid::KeyboardHost;

bind_interrupts!(struct Irqs {
    USBD => embassy_nrf::usb::InterruptHandler<peripherals::USBD>;
    CLOCK_POWER => embassy_nrf::usb::vbus_detect::InterruptHandler;
});

/// Concrete USB driver type for this board.
pub type UsbDriver = Driver<'static, peripherals::USBD, HardwareVbusDetect>;

static KB_STATE: StaticCell<State> = StaticCell::new();
static USB_CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_MSOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_CTRL_BUF: StaticCell<[u8; 128]> = StaticCell::new();
static USB_STATE_HANDLER: StaticCell<UsbStateHandler> = StaticCell::new();

/// `true` asks the runner to attach to the bus, `false` to detach.
static USB_ENABLE: Signal<CriticalSectionRawMutex, bool> = Signal::new();

/// Set while the host has the keyboard configured.
static CONFIGURED: AtomicBool = AtomicBool::new(false);

struct UsbStateHandler;

impl embassy_usb::Handler for UsbStateHandler {
    fn configured(&mut self, configured: bool) {
        CONFIGURED.store(configured, Ordering::Release);
        info!("USB configured={}", configured);
    }

    fn reset(&mut self) {
        CONFIGURED.store(false, Ordering::Release);
    }
}

/// Build result containing the USB device runner and the keyboard handle.
pub struct UsbKeyboardDevice {
    pub device: UsbDevice<'static, UsbDriver>,
    pub keyboard: UsbKeyboard,
}

/// Initialise the USB stack and create the HID keyboard.
///
/// Must be called exactly once.  All static buffers are consumed here.
pub fn init(usbd: peripherals::USBD) -> UsbKeyboardDevice {
    // Create the low-level USB driver with hardware VBUS detection.
    let driver = Driver::new(usbd, Irqs, HardwareVbusDetect::new(Irqs));

    // USB device-level configuration.
    let mut usb_config = Config::new(config::USB_VID, config::USB_PID);
    usb_config.manufacturer = Some(config::USB_MANUFACTURER);
    usb_config.product = Some(config::USB_PRODUCT);
    usb_config.serial_number = Some(config::USB_SERIAL_NUMBER);
    usb_config.max_power = 100; // mA
    usb_config.max_packet_size_0 = 64;

    // Allocate static descriptor buffers.
    let config_desc = USB_CONFIG_DESC.init([0u8; 256]);
    let bos_desc = USB_BOS_DESC.init([0u8; 256]);
    let msos_desc = USB_MSOS_DESC.init([0u8; 256]);
    let ctrl_buf = USB_CTRL_BUF.init([0u8; 128]);

    let mut builder = Builder::new(
        driver,
        usb_config,
        config_desc,
        bos_desc,
        msos_desc,
        ctrl_buf,
    );

    let handler = USB_STATE_HANDLER.init(UsbStateHandler);
    builder.handler(handler);

    let kb_state = KB_STATE.init(State::new());
    let kb_config = HidConfig {
        report_descriptor: KEYBOARD_REPORT_DESCRIPTOR,
        request_handler: None,
        poll_ms: config::USB_HID_POLL_MS,
        max_packet_size: 8,
    };
    let writer = HidWriter::new(&mut builder, kb_state, kb_config);

    let device = builder.build();

    info!("USB HID keyboard initialised");

    UsbKeyboardDevice {
        device,
        keyboard: UsbKeyboard { writer },
    }
}

/// Run the USB device stack - must be spawned as a dedicated Embassy task.
///
/// The device stays detached until [`UsbKeyboard::activate`] and is
/// detached again by [`UsbKeyboard::restore`].
pub async fn run_usb_device(mut device: UsbDevice<'static, UsbDriver>) -> ! {
    info!("USB device task started");

    loop {
        while !USB_ENABLE.wait().await {}
        info!("USB keyboard attached");

        loop {
            match select(device.run_until_suspend(), USB_ENABLE.wait()).await {
                Either::First(()) => {
                    if let Either::Second(false) =
                        select(device.wait_resume(), USB_ENABLE.wait()).await
                    {
                        break;
                    }
                }
                Either::Second(false) => break,
                Either::Second(true) => {}
            }
        }

        device.disable().await;
        CONFIGURED.store(false, Ordering::Release);
        info!("USB keyboard detached");
    }
}

/// Keyboard handle used by the typing emitter.
pub struct UsbKeyboard {
    writer: HidWriter<'static, UsbDriver, 8>,
}

impl KeyboardHost for UsbKeyboard {
    fn activate(&mut self) {
        USB_ENABLE.signal(true);
    }

    fn is_connected(&mut self) -> bool {
        CONFIGURED.load(Ordering::Acquire)
    }

    async fn send_report(&mut self, report: &KeyboardReport) -> Result<(), Error> {
        let mut buf = [0u8; KEYBOARD_REPORT_SIZE];
        let n = report.serialize(&mut buf);
        let timeout = Duration::from_millis(config::USB_REPORT_TIMEOUT_MS);
        match with_timeout(timeout, self.writer.write(&buf[..n])).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(_)) => Err(Error::Usb),
            Err(_) => Err(Error::Timeout),
        }
    }

    fn restore(&mut self) {
        USB_ENABLE.signal(false);
    }
}
