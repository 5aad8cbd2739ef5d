use colored::*;

pub fn banner() {
    let title_color = Color::BrightCyan;
    let rule_color = Color::BrightBlue;

    println!(
        "{}",
        "🏒 WisselApp Password Reset Tool".color(title_color).bold()
    );
    println!("{}", "================================".color(rule_color));
    println!();
}
