//! Block-character artwork for the profile card.

/// Smiley banner, 90 columns wide
pub const BANNER: [&str; 42] = [
    "                                       ▒▓▓█████▓▓▓░                                       ",
    "                                ▓█████████▓▓▓▓▓██████████▓                                ",
    "                           ▓██████░░░░░░░░░░░░░░░░░░░░░░██████▒                           ",
    "                        ▓████░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░▒████▓                        ",
    "                     ▓████░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░████▓                     ",
    "                   ████░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░████                   ",
    "                 ████░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░████                 ",
    "               ▒███░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░███▒               ",
    "              ███░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░███              ",
    "            ░██▓░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░▓██░            ",
    "           ▓██▒░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░██▓           ",
    "          ▓██░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░██▓          ",
    "         ▓██░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░██▓         ",
    "        ▒██░░░░░░░░░░░░░░░░░░░░████▓░░░░░░░░░░░░░░░░░░▓████░░░░░░░░░░░░░░░░░░░░██▓        ",
    "        ██▓░░░░░░░░░░░░░░░░░░░███████░░░░░░░░░░░░░░░░███████░░░░░░░░░░░░░░░░░░░▒██        ",
    "       ███░░░░░░░░░░░░░░░░░░░████████░░░░░░░░░░░░░░░░████████░░░░░░░░░░░░░░░░░░░███       ",
    "       ██▒░░░░░░░░░░░░░░░░░░░░███████░░░░░░░░░░░░░░░░███████░░░░░░░░░░░░░░░░░░░░░██       ",
    "      ███░░░░░░░░░░░░░░░░░░░░░██████░░░░░░░░░░░░░░░░░░█████░░░░░░░░░░░░░░░░░░░░░░███      ",
    "      ███░░░░░░░░░░░░░░░░░░░░░░░░▒░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░███      ",
    "      ██▓░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░▒██      ",
    "      ██▓░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░██      ",
    "      ██▒░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░██      ",
    "      ██▓░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░▒██      ",
    "      ███░░░░░░░░░░░░░░▒█████░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░█████▒░░░░░░░░░░░░░░▓██      ",
    "      ███░░░░░░░░░░░░░█████▒░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░▒█████░░░░░░░░░░░░░███      ",
    "       ██░░░░░░░░░░░░░▓█░███▓░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░▒███▒█▓░░░░░░░░░░░░░██░      ",
    "       ███░░░░░░░░░░░░░░░░▓███░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░███▓░░░░░░░░░░░░░░░░███       ",
    "        ██▒░░░░░░░░░░░░░░░░░████░░░░░░░░░░░░░░░░░░░░░░░░░░████░░░░░░░░░░░░░░░░░░██▒       ",
    "        ▓██░░░░░░░░░░░░░░░░░░▒█████▒░░░░░░░░░░░░░░░░░░▒█████▒░░░░░░░░░░░░░░░░░░███        ",
    "         ███░░░░░░░░░░░░░░░░░░░▓████████░░░░░░░░░░████████▒░░░░░░░░░░░░░░░░░░░███         ",
    "          ███░░░░░░░░░░░░░░░░░░░░░▒████████████████████░░░░░░░░░░░░░░░░░░░░░░███          ",
    "           ███░░░░░░░░░░░░░░░░░░░░░░░░░▓▓████████▓▓░░░░░░░░░░░░░░░░░░░░░░░░░███           ",
    "            ███░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░███            ",
    "             ███▓░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░▒███             ",
    "               ███░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░███░              ",
    "                ████░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░████                ",
    "                  ████░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░████                  ",
    "                    ████▒░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░████                    ",
    "                      ▓████▒░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░▒████▓                      ",
    "                         ▓█████░░░░░░░░░░░░░░░░░░░░░░░░░░░░█████▓                         ",
    "                            ░████████░░░░░░░░░░░░░░░▒████████▒                            ",
    "                                 ░██████████████████████░                                 ",
];

/// "SYSTEM INFO"
pub const SYSTEM_INFO_HEADER: [&str; 3] = [
    "▄▀▀  ▀▄ ▄▀ ▄▀▀  ▀▀▀█ ▄▀▀  ▄▀▄▀▄   ▀ ▄▀▀▄ ▄▀▀  ▄▀▀▄",
    "▀▀█   ▀█   ▀▀█   ▀▀  ▓▀   █ ▀ █   █ █  █ ▓▀   █  █",
    "▀▀▀   ▀    ▀▀▀   ▀   ▀▀▀  ▀   ▀   ▀ ▀  ▀ ▀    ▀▀▀ ",
];

/// "CLAUDE CODE"
pub const SESSIONS_HEADER: [&str; 3] = [
    "▄▀▀  ▓   ▄▀▀▄ ▓  ▄ ▄▀▀▄ ▄▀▀    ▄▀▀  ▄▀▀▄ ▄▀▀▄ ▄▀▀ ",
    "█    █   █▀▀▓ █  ▓ █  ▓ ▓▀     █    █  ▓ █  ▓ ▓▀  ",
    " ▀▀  ▀▀▀ ▀    ▀▀▀▀ ▀▀▀▀ ▀▀▀     ▀▀   ▀▀  ▀▀▀▀ ▀▀▀ ",
];

/// "GITHUB STATS"
pub const GITHUB_HEADER: [&str; 3] = [
    "▄▀▀  ▀ ▀▀▀█ ▓  ▄ ▓  ▄ ▄▀▄   ▄▀▀  ▀▀▀█ ▄▀▀▄ ▀▀▀█ ▄▀▀ ",
    "█ ▀▓ █  ▀▀  █▀▀▓ █  ▓ █▀▀▄  ▀▀█   ▀▀  █▀▀▓  ▀▀  ▀▀█ ",
    " ▀▀  ▀  ▀   ▀  ▀ ▀▀▀▀ ▀▀▀   ▀▀▀   ▀   ▀  ▀  ▀   ▀▀▀ ",
];

/// "CONTACT", terminal preview only
pub const CONTACT_HEADER: [&str; 3] = [
    "▄▀▀  ▄▀▀▄ ▄▀▀▄ ▀▀▀█ ▄▀▀▄ ▄▀▀  ▀▀▀█",
    "█    █  ▓ █  ▓  ▀▀  █▀▀▓ █     ▀▀ ",
    " ▀▀   ▀▀  ▀  ▀  ▀   ▀  ▀  ▀▀   ▀  ",
];
