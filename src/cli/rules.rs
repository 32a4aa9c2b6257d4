use crate::display::display_rules;

pub fn show_rules() {
    display_rules();
}
