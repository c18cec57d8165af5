//! Firmware entry point for the nRF52840 board.
//!
//! Brings up USB, the OLED and the buttons, then hands everything to the
//! menu loop. When the user backs out of the main menu the loop returns and
//! the firmware idles with the display off.

#![no_std]
#![no_main]

use celeste_remote::ui::buttons::{self, EventChannel};
use celeste_remote::ui::display;
use celeste_remote::ui::panel::Panel;
use celeste_remote::ui::ButtonEvent;
use celeste_remote::usb::{self, UsbDriver, UsbKeyboardDevice};
use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Pin};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, pac, peripherals};
use embassy_time::Delay;
use embassy_usb::UsbDevice;
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

static BUTTON_EVENTS: EventChannel = EventChannel::new();

#[embassy_executor::task]
async fn usb_task(device: UsbDevice<'static, UsbDriver>) {
    usb::run_usb_device(device).await
}

#[embassy_executor::task(pool_size = 4)]
async fn button_task(pin: AnyPin, button: ButtonEvent) {
    buttons::button_task(pin, button, BUTTON_EVENTS.sender()).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("celeste-remote starting");

    // USBD needs the external crystal.
    pac::CLOCK.tasks_hfclkstart().write_value(1);
    while pac::CLOCK.events_hfclkstarted().read() != 1 {}

    let UsbKeyboardDevice {
        device,
        mut keyboard,
    } = usb::init(p.USBD);
    unwrap!(spawner.spawn(usb_task(device)));

    let buttons = [
        (p.P0_11.degrade(), ButtonEvent::Up),
        (p.P0_12.degrade(), ButtonEvent::Down),
        (p.P0_24.degrade(), ButtonEvent::Select),
        (p.P0_25.degrade(), ButtonEvent::Back),
    ];
    for (pin, button) in buttons {
        unwrap!(spawner.spawn(button_task(pin, button)));
    }

    let mut i2c_config = twim::Config::default();
    i2c_config.frequency = twim::Frequency::K400;
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, i2c_config);
    let mut panel = Panel::new(display::init(i2c), BUTTON_EVENTS.receiver());

    let summary = celeste_remote::run(&mut panel, &mut keyboard, &mut Delay).await;
    info!(
        "Menu closed after {} ticks, {} commands sent",
        summary.ticks, summary.commands_sent
    );

    core::future::pending::<()>().await;
}
