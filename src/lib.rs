/*!
# ST7036 LCD Driver

Driver for 2x20 character LCD modules built on the Sitronix ST7036 (Newhaven BiZ / CiZ COG modules),
talking over their native I2C interface.

Basic Usage:

1. Initialize a "sender" <br/>
    This crate include an I2C driver [`sender::I2cSender`],
    or you can use any driver implemented [`sender::SendCommand`].
<br/>
<br/>
2. Use [`lcd::Lcd::new()`] to create a [`lcd::Lcd`], and initialize the LCD hardware,
    tune delays and error handling with [`lcd::Config`]
<br/>
<br/>
3. use any methods provide by [`lcd::Lcd`] to control the LCD,
    or stage a text with [`lcd::Lcd::show()`] and place it with [`writer::DisplayWriter`]

The driver never reads from the LCD, the cursor position it reports is a mirror kept in software.
*/

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod lcd;
pub mod sender;
mod state;
pub mod utils;
pub mod writer;

pub use state::{CursorPosition, COLUMNS, ROWS};
