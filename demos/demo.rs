extern crate colortext;

use anyhow::Result;
use colortext::prelude::*;

#[derive(Debug)]
struct Toolbar {
    fg: Color,
    bg: Color,
    sel: Color,
}

impl ColorHost for Toolbar {
    fn foreground(&self) -> Color {
        self.fg
    }

    fn set_foreground(&mut self, color: Color) {
        self.fg = color;
        println!("foreground -> {}", display(Some(color), false));
    }

    fn background(&self) -> Color {
        self.bg
    }

    fn set_background(&mut self, color: Color) {
        self.bg = color;
        println!("background -> {}", display(Some(color), false));
    }

    fn selection(&self) -> Color {
        self.sel
    }

    fn set_selection(&mut self, color: Color) {
        self.sel = color;
        println!("selection -> {}", display(Some(color), false));
    }

    fn request_redraw(&mut self) {
        println!("redraw");
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // decode whatever was passed on the command line
    for arg in std::env::args().skip(1) {
        let color = decode_or_gray(&arg);
        println!(
            "{arg} -> {} (r={} g={} b={} a={})",
            display(Some(color), false),
            color.r,
            color.g,
            color.b,
            color.a
        );
    }

    let mut toolbar = Toolbar {
        fg: BLACK,
        bg: WHITE,
        sel: YELLOW,
    };

    println!("choices: {}", color_options(&["None"]).join(", "));

    let options = ColorOptions::open(&toolbar);
    options.select(Slot::Foreground, "orange", &mut toolbar);
    options.select(Slot::Selection, "cyan", &mut toolbar);
    options.cancel(&mut toolbar);

    let json = serde_json::to_string(&toolbar.sel)?;
    println!("selection as json: {json}");
    Ok(())
}
