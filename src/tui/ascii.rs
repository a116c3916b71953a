// header logo

pub const MEDCHECK_LOGO: [&str; 4] = [
    " __  __          _  ___ _           _   ",
    "|  \\/  | ___  __| |/ __| |_  ___ __| |__",
    "| |\\/| |/ -_)/ _` | (__| ' \\/ -_) _| / /",
    "|_|  |_|\\___|\\__,_|\\___|_||_\\___\\__|_\\_\\",
];
