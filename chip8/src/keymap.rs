use sdl2::keyboard::Keycode;

/// Translates a host key into the Chip-8 key it stands for.
///
/// The hexadecimal keypad is laid over the left 4 columns of a QWERTY keyboard:
/// ```text
/// |1|2|3|C|      |1|2|3|4|
/// |4|5|6|D|  ->  |Q|W|E|R|
/// |7|8|9|E|  ->  |A|S|D|F|
/// |A|0|B|F|      |Z|X|C|V|
/// ```
pub fn keymap(key: Keycode) -> Option<u8> {
    match key {
        Keycode::X => Some(0x0),
        Keycode::Num1 => Some(0x1),
        Keycode::Num2 => Some(0x2),
        Keycode::Num3 => Some(0x3),
        Keycode::Q => Some(0x4),
        Keycode::W => Some(0x5),
        Keycode::E => Some(0x6),
        Keycode::A => Some(0x7),
        Keycode::S => Some(0x8),
        Keycode::D => Some(0x9),
        Keycode::Z => Some(0xA),
        Keycode::C => Some(0xB),
        Keycode::Num4 => Some(0xC),
        Keycode::R => Some(0xD),
        Keycode::F => Some(0xE),
        Keycode::V => Some(0xF),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_every_key_once() {
        let hosts = [
            Keycode::X,
            Keycode::Num1,
            Keycode::Num2,
            Keycode::Num3,
            Keycode::Q,
            Keycode::W,
            Keycode::E,
            Keycode::A,
            Keycode::S,
            Keycode::D,
            Keycode::Z,
            Keycode::C,
            Keycode::Num4,
            Keycode::R,
            Keycode::F,
            Keycode::V,
        ];
        for (key, &host) in hosts.iter().enumerate() {
            assert_eq!(keymap(host), Some(key as u8));
        }
    }

    #[test]
    fn test_ignores_unmapped_keys() {
        assert_eq!(keymap(Keycode::Space), None);
        assert_eq!(keymap(Keycode::Num0), None);
        assert_eq!(keymap(Keycode::B), None);
    }
}
