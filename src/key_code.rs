//! Linux key codes (see [input-event-codes.h]).
//!
//! Every `KEY_*` code up to `KEY_MAX` is catalogued. The `BTN_*` range (0x100-0x15f) is not:
//! buttons belong to mice, joysticks and touch devices. Each code carries its canonical name, the
//! kernel constant with the `KEY_` prefix stripped. Aliased codes use the first name the kernel
//! defines (`SCREENLOCK` rather than `COFFEE`).
//!
//! [input-event-codes.h]: https://elixir.bootlin.com/linux/v5.19.17/source/include/uapi/linux/input-event-codes.h#L75

use crate::error::KeystreamError;
use std::convert::TryFrom;
use std::fmt;

macro_rules! key_codes {
    ($($variant:ident = $code:literal => $name:literal,)*) => {
        /// A key code, as reported in the `code` field of an `EV_KEY` event.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u16)]
        pub enum KeyCode {
            $($variant = $code,)*
        }

        impl KeyCode {
            /// The canonical name of the key (e.g. `A`, `1`, `ENTER`, `LEFTSHIFT`).
            pub fn name(&self) -> &'static str {
                match self {
                    $(KeyCode::$variant => $name,)*
                }
            }
        }

        impl TryFrom<u16> for KeyCode {
            type Error = KeystreamError;

            fn try_from(code: u16) -> Result<Self, Self::Error> {
                match code {
                    $($code => Ok(KeyCode::$variant),)*
                    n => Err(KeystreamError::UnknownKeyCode(n)),
                }
            }
        }
    };
}

key_codes! {
    Reserved = 0 => "RESERVED",
    Esc = 1 => "ESC",
    Key1 = 2 => "1",
    Key2 = 3 => "2",
    Key3 = 4 => "3",
    Key4 = 5 => "4",
    Key5 = 6 => "5",
    Key6 = 7 => "6",
    Key7 = 8 => "7",
    Key8 = 9 => "8",
    Key9 = 10 => "9",
    Key0 = 11 => "0",
    Minus = 12 => "MINUS",
    Equal = 13 => "EQUAL",
    Backspace = 14 => "BACKSPACE",
    Tab = 15 => "TAB",
    Q = 16 => "Q",
    W = 17 => "W",
    E = 18 => "E",
    R = 19 => "R",
    T = 20 => "T",
    Y = 21 => "Y",
    U = 22 => "U",
    I = 23 => "I",
    O = 24 => "O",
    P = 25 => "P",
    LeftBrace = 26 => "LEFTBRACE",
    RightBrace = 27 => "RIGHTBRACE",
    Enter = 28 => "ENTER",
    LeftCtrl = 29 => "LEFTCTRL",
    A = 30 => "A",
    S = 31 => "S",
    D = 32 => "D",
    F = 33 => "F",
    G = 34 => "G",
    H = 35 => "H",
    J = 36 => "J",
    K = 37 => "K",
    L = 38 => "L",
    Semicolon = 39 => "SEMICOLON",
    Apostrophe = 40 => "APOSTROPHE",
    Grave = 41 => "GRAVE",
    LeftShift = 42 => "LEFTSHIFT",
    Backslash = 43 => "BACKSLASH",
    Z = 44 => "Z",
    X = 45 => "X",
    C = 46 => "C",
    V = 47 => "V",
    B = 48 => "B",
    N = 49 => "N",
    M = 50 => "M",
    Comma = 51 => "COMMA",
    Dot = 52 => "DOT",
    Slash = 53 => "SLASH",
    RightShift = 54 => "RIGHTSHIFT",
    KpAsterisk = 55 => "KPASTERISK",
    LeftAlt = 56 => "LEFTALT",
    Space = 57 => "SPACE",
    CapsLock = 58 => "CAPSLOCK",
    F1 = 59 => "F1",
    F2 = 60 => "F2",
    F3 = 61 => "F3",
    F4 = 62 => "F4",
    F5 = 63 => "F5",
    F6 = 64 => "F6",
    F7 = 65 => "F7",
    F8 = 66 => "F8",
    F9 = 67 => "F9",
    F10 = 68 => "F10",
    NumLock = 69 => "NUMLOCK",
    ScrollLock = 70 => "SCROLLLOCK",
    Kp7 = 71 => "KP7",
    Kp8 = 72 => "KP8",
    Kp9 = 73 => "KP9",
    KpMinus = 74 => "KPMINUS",
    Kp4 = 75 => "KP4",
    Kp5 = 76 => "KP5",
    Kp6 = 77 => "KP6",
    KpPlus = 78 => "KPPLUS",
    Kp1 = 79 => "KP1",
    Kp2 = 80 => "KP2",
    Kp3 = 81 => "KP3",
    Kp0 = 82 => "KP0",
    KpDot = 83 => "KPDOT",
    ZenkakuHankaku = 85 => "ZENKAKUHANKAKU",
    Key102nd = 86 => "102ND",
    F11 = 87 => "F11",
    F12 = 88 => "F12",
    Ro = 89 => "RO",
    Katakana = 90 => "KATAKANA",
    Hiragana = 91 => "HIRAGANA",
    Henkan = 92 => "HENKAN",
    KatakanaHiragana = 93 => "KATAKANAHIRAGANA",
    Muhenkan = 94 => "MUHENKAN",
    KpJpComma = 95 => "KPJPCOMMA",
    KpEnter = 96 => "KPENTER",
    RightCtrl = 97 => "RIGHTCTRL",
    KpSlash = 98 => "KPSLASH",
    SysRq = 99 => "SYSRQ",
    RightAlt = 100 => "RIGHTALT",
    LineFeed = 101 => "LINEFEED",
    Home = 102 => "HOME",
    Up = 103 => "UP",
    PageUp = 104 => "PAGEUP",
    Left = 105 => "LEFT",
    Right = 106 => "RIGHT",
    End = 107 => "END",
    Down = 108 => "DOWN",
    PageDown = 109 => "PAGEDOWN",
    Insert = 110 => "INSERT",
    Delete = 111 => "DELETE",
    Macro = 112 => "MACRO",
    Mute = 113 => "MUTE",
    VolumeDown = 114 => "VOLUMEDOWN",
    VolumeUp = 115 => "VOLUMEUP",
    Power = 116 => "POWER",
    KpEqual = 117 => "KPEQUAL",
    KpPlusMinus = 118 => "KPPLUSMINUS",
    Pause = 119 => "PAUSE",
    Scale = 120 => "SCALE",
    KpComma = 121 => "KPCOMMA",
    Hangeul = 122 => "HANGEUL",
    Hanja = 123 => "HANJA",
    Yen = 124 => "YEN",
    LeftMeta = 125 => "LEFTMETA",
    RightMeta = 126 => "RIGHTMETA",
    Compose = 127 => "COMPOSE",
    Stop = 128 => "STOP",
    Again = 129 => "AGAIN",
    Props = 130 => "PROPS",
    Undo = 131 => "UNDO",
    Front = 132 => "FRONT",
    Copy = 133 => "COPY",
    Open = 134 => "OPEN",
    Paste = 135 => "PASTE",
    Find = 136 => "FIND",
    Cut = 137 => "CUT",
    Help = 138 => "HELP",
    Menu = 139 => "MENU",
    Calc = 140 => "CALC",
    Setup = 141 => "SETUP",
    Sleep = 142 => "SLEEP",
    WakeUp = 143 => "WAKEUP",
    File = 144 => "FILE",
    Sendfile = 145 => "SENDFILE",
    Deletefile = 146 => "DELETEFILE",
    Xfer = 147 => "XFER",
    Prog1 = 148 => "PROG1",
    Prog2 = 149 => "PROG2",
    Www = 150 => "WWW",
    Msdos = 151 => "MSDOS",
    Screenlock = 152 => "SCREENLOCK",
    RotateDisplay = 153 => "ROTATE_DISPLAY",
    Cyclewindows = 154 => "CYCLEWINDOWS",
    Mail = 155 => "MAIL",
    Bookmarks = 156 => "BOOKMARKS",
    Computer = 157 => "COMPUTER",
    Back = 158 => "BACK",
    Forward = 159 => "FORWARD",
    Closecd = 160 => "CLOSECD",
    EjectCd = 161 => "EJECTCD",
    Ejectclosecd = 162 => "EJECTCLOSECD",
    NextSong = 163 => "NEXTSONG",
    PlayPause = 164 => "PLAYPAUSE",
    PreviousSong = 165 => "PREVIOUSSONG",
    StopCd = 166 => "STOPCD",
    Record = 167 => "RECORD",
    Rewind = 168 => "REWIND",
    Phone = 169 => "PHONE",
    Iso = 170 => "ISO",
    Config = 171 => "CONFIG",
    HomePage = 172 => "HOMEPAGE",
    Refresh = 173 => "REFRESH",
    Exit = 174 => "EXIT",
    Move = 175 => "MOVE",
    Edit = 176 => "EDIT",
    Scrollup = 177 => "SCROLLUP",
    Scrolldown = 178 => "SCROLLDOWN",
    Kpleftparen = 179 => "KPLEFTPAREN",
    Kprightparen = 180 => "KPRIGHTPAREN",
    New = 181 => "NEW",
    Redo = 182 => "REDO",
    F13 = 183 => "F13",
    F14 = 184 => "F14",
    F15 = 185 => "F15",
    F16 = 186 => "F16",
    F17 = 187 => "F17",
    F18 = 188 => "F18",
    F19 = 189 => "F19",
    F20 = 190 => "F20",
    F21 = 191 => "F21",
    F22 = 192 => "F22",
    F23 = 193 => "F23",
    F24 = 194 => "F24",
    Playcd = 200 => "PLAYCD",
    Pausecd = 201 => "PAUSECD",
    Prog3 = 202 => "PROG3",
    Prog4 = 203 => "PROG4",
    AllApplications = 204 => "ALL_APPLICATIONS",
    Suspend = 205 => "SUSPEND",
    Close = 206 => "CLOSE",
    Play = 207 => "PLAY",
    Fastforward = 208 => "FASTFORWARD",
    Bassboost = 209 => "BASSBOOST",
    Print = 210 => "PRINT",
    Hp = 211 => "HP",
    Camera = 212 => "CAMERA",
    Sound = 213 => "SOUND",
    Question = 214 => "QUESTION",
    Email = 215 => "EMAIL",
    Chat = 216 => "CHAT",
    Search = 217 => "SEARCH",
    Connect = 218 => "CONNECT",
    Finance = 219 => "FINANCE",
    Sport = 220 => "SPORT",
    Shop = 221 => "SHOP",
    Alterase = 222 => "ALTERASE",
    Cancel = 223 => "CANCEL",
    BrightnessDown = 224 => "BRIGHTNESSDOWN",
    BrightnessUp = 225 => "BRIGHTNESSUP",
    Media = 226 => "MEDIA",
    Switchvideomode = 227 => "SWITCHVIDEOMODE",
    Kbdillumtoggle = 228 => "KBDILLUMTOGGLE",
    Kbdillumdown = 229 => "KBDILLUMDOWN",
    Kbdillumup = 230 => "KBDILLUMUP",
    KeySend = 231 => "SEND",
    Reply = 232 => "REPLY",
    Forwardmail = 233 => "FORWARDMAIL",
    Save = 234 => "SAVE",
    Documents = 235 => "DOCUMENTS",
    Battery = 236 => "BATTERY",
    Bluetooth = 237 => "BLUETOOTH",
    Wlan = 238 => "WLAN",
    Uwb = 239 => "UWB",
    Unknown = 240 => "UNKNOWN",
    VideoNext = 241 => "VIDEO_NEXT",
    VideoPrev = 242 => "VIDEO_PREV",
    BrightnessCycle = 243 => "BRIGHTNESS_CYCLE",
    BrightnessAuto = 244 => "BRIGHTNESS_AUTO",
    DisplayOff = 245 => "DISPLAY_OFF",
    Wwan = 246 => "WWAN",
    Rfkill = 247 => "RFKILL",
    Micmute = 248 => "MICMUTE",
    KeyOk = 0x160 => "OK",
    Select = 0x161 => "SELECT",
    Goto = 0x162 => "GOTO",
    Clear = 0x163 => "CLEAR",
    Power2 = 0x164 => "POWER2",
    KeyOption = 0x165 => "OPTION",
    Info = 0x166 => "INFO",
    Time = 0x167 => "TIME",
    Vendor = 0x168 => "VENDOR",
    Archive = 0x169 => "ARCHIVE",
    Program = 0x16a => "PROGRAM",
    Channel = 0x16b => "CHANNEL",
    Favorites = 0x16c => "FAVORITES",
    Epg = 0x16d => "EPG",
    Pvr = 0x16e => "PVR",
    Mhp = 0x16f => "MHP",
    Language = 0x170 => "LANGUAGE",
    Title = 0x171 => "TITLE",
    Subtitle = 0x172 => "SUBTITLE",
    Angle = 0x173 => "ANGLE",
    FullScreen = 0x174 => "FULL_SCREEN",
    Mode = 0x175 => "MODE",
    Keyboard = 0x176 => "KEYBOARD",
    AspectRatio = 0x177 => "ASPECT_RATIO",
    Pc = 0x178 => "PC",
    Tv = 0x179 => "TV",
    Tv2 = 0x17a => "TV2",
    Vcr = 0x17b => "VCR",
    Vcr2 = 0x17c => "VCR2",
    Sat = 0x17d => "SAT",
    Sat2 = 0x17e => "SAT2",
    Cd = 0x17f => "CD",
    Tape = 0x180 => "TAPE",
    Radio = 0x181 => "RADIO",
    Tuner = 0x182 => "TUNER",
    Player = 0x183 => "PLAYER",
    Text = 0x184 => "TEXT",
    Dvd = 0x185 => "DVD",
    Aux = 0x186 => "AUX",
    Mp3 = 0x187 => "MP3",
    Audio = 0x188 => "AUDIO",
    Video = 0x189 => "VIDEO",
    Directory = 0x18a => "DIRECTORY",
    List = 0x18b => "LIST",
    Memo = 0x18c => "MEMO",
    Calendar = 0x18d => "CALENDAR",
    Red = 0x18e => "RED",
    Green = 0x18f => "GREEN",
    Yellow = 0x190 => "YELLOW",
    Blue = 0x191 => "BLUE",
    Channelup = 0x192 => "CHANNELUP",
    Channeldown = 0x193 => "CHANNELDOWN",
    First = 0x194 => "FIRST",
    Last = 0x195 => "LAST",
    Ab = 0x196 => "AB",
    Next = 0x197 => "NEXT",
    Restart = 0x198 => "RESTART",
    Slow = 0x199 => "SLOW",
    Shuffle = 0x19a => "SHUFFLE",
    KeyBreak = 0x19b => "BREAK",
    Previous = 0x19c => "PREVIOUS",
    Digits = 0x19d => "DIGITS",
    Teen = 0x19e => "TEEN",
    Twen = 0x19f => "TWEN",
    Videophone = 0x1a0 => "VIDEOPHONE",
    Games = 0x1a1 => "GAMES",
    Zoomin = 0x1a2 => "ZOOMIN",
    Zoomout = 0x1a3 => "ZOOMOUT",
    Zoomreset = 0x1a4 => "ZOOMRESET",
    Wordprocessor = 0x1a5 => "WORDPROCESSOR",
    Editor = 0x1a6 => "EDITOR",
    Spreadsheet = 0x1a7 => "SPREADSHEET",
    Graphicseditor = 0x1a8 => "GRAPHICSEDITOR",
    Presentation = 0x1a9 => "PRESENTATION",
    Database = 0x1aa => "DATABASE",
    News = 0x1ab => "NEWS",
    Voicemail = 0x1ac => "VOICEMAIL",
    Addressbook = 0x1ad => "ADDRESSBOOK",
    Messenger = 0x1ae => "MESSENGER",
    Displaytoggle = 0x1af => "DISPLAYTOGGLE",
    Spellcheck = 0x1b0 => "SPELLCHECK",
    Logoff = 0x1b1 => "LOGOFF",
    Dollar = 0x1b2 => "DOLLAR",
    Euro = 0x1b3 => "EURO",
    Frameback = 0x1b4 => "FRAMEBACK",
    Frameforward = 0x1b5 => "FRAMEFORWARD",
    ContextMenu = 0x1b6 => "CONTEXT_MENU",
    MediaRepeat = 0x1b7 => "MEDIA_REPEAT",
    Key10channelsup = 0x1b8 => "10CHANNELSUP",
    Key10channelsdown = 0x1b9 => "10CHANNELSDOWN",
    Images = 0x1ba => "IMAGES",
    NotificationCenter = 0x1bc => "NOTIFICATION_CENTER",
    PickupPhone = 0x1bd => "PICKUP_PHONE",
    HangupPhone = 0x1be => "HANGUP_PHONE",
    LinkPhone = 0x1bf => "LINK_PHONE",
    DelEol = 0x1c0 => "DEL_EOL",
    DelEos = 0x1c1 => "DEL_EOS",
    InsLine = 0x1c2 => "INS_LINE",
    DelLine = 0x1c3 => "DEL_LINE",
    Fn = 0x1d0 => "FN",
    FnEsc = 0x1d1 => "FN_ESC",
    FnF1 = 0x1d2 => "FN_F1",
    FnF2 = 0x1d3 => "FN_F2",
    FnF3 = 0x1d4 => "FN_F3",
    FnF4 = 0x1d5 => "FN_F4",
    FnF5 = 0x1d6 => "FN_F5",
    FnF6 = 0x1d7 => "FN_F6",
    FnF7 = 0x1d8 => "FN_F7",
    FnF8 = 0x1d9 => "FN_F8",
    FnF9 = 0x1da => "FN_F9",
    FnF10 = 0x1db => "FN_F10",
    FnF11 = 0x1dc => "FN_F11",
    FnF12 = 0x1dd => "FN_F12",
    Fn1 = 0x1de => "FN_1",
    Fn2 = 0x1df => "FN_2",
    FnD = 0x1e0 => "FN_D",
    FnE = 0x1e1 => "FN_E",
    FnF = 0x1e2 => "FN_F",
    FnS = 0x1e3 => "FN_S",
    FnB = 0x1e4 => "FN_B",
    FnRightShift = 0x1e5 => "FN_RIGHT_SHIFT",
    BrlDot1 = 0x1f1 => "BRL_DOT1",
    BrlDot2 = 0x1f2 => "BRL_DOT2",
    BrlDot3 = 0x1f3 => "BRL_DOT3",
    BrlDot4 = 0x1f4 => "BRL_DOT4",
    BrlDot5 = 0x1f5 => "BRL_DOT5",
    BrlDot6 = 0x1f6 => "BRL_DOT6",
    BrlDot7 = 0x1f7 => "BRL_DOT7",
    BrlDot8 = 0x1f8 => "BRL_DOT8",
    BrlDot9 = 0x1f9 => "BRL_DOT9",
    BrlDot10 = 0x1fa => "BRL_DOT10",
    Numeric0 = 0x200 => "NUMERIC_0",
    Numeric1 = 0x201 => "NUMERIC_1",
    Numeric2 = 0x202 => "NUMERIC_2",
    Numeric3 = 0x203 => "NUMERIC_3",
    Numeric4 = 0x204 => "NUMERIC_4",
    Numeric5 = 0x205 => "NUMERIC_5",
    Numeric6 = 0x206 => "NUMERIC_6",
    Numeric7 = 0x207 => "NUMERIC_7",
    Numeric8 = 0x208 => "NUMERIC_8",
    Numeric9 = 0x209 => "NUMERIC_9",
    NumericStar = 0x20a => "NUMERIC_STAR",
    NumericPound = 0x20b => "NUMERIC_POUND",
    NumericA = 0x20c => "NUMERIC_A",
    NumericB = 0x20d => "NUMERIC_B",
    NumericC = 0x20e => "NUMERIC_C",
    NumericD = 0x20f => "NUMERIC_D",
    CameraFocus = 0x210 => "CAMERA_FOCUS",
    WpsButton = 0x211 => "WPS_BUTTON",
    TouchpadToggle = 0x212 => "TOUCHPAD_TOGGLE",
    TouchpadOn = 0x213 => "TOUCHPAD_ON",
    TouchpadOff = 0x214 => "TOUCHPAD_OFF",
    CameraZoomin = 0x215 => "CAMERA_ZOOMIN",
    CameraZoomout = 0x216 => "CAMERA_ZOOMOUT",
    CameraUp = 0x217 => "CAMERA_UP",
    CameraDown = 0x218 => "CAMERA_DOWN",
    CameraLeft = 0x219 => "CAMERA_LEFT",
    CameraRight = 0x21a => "CAMERA_RIGHT",
    AttendantOn = 0x21b => "ATTENDANT_ON",
    AttendantOff = 0x21c => "ATTENDANT_OFF",
    AttendantToggle = 0x21d => "ATTENDANT_TOGGLE",
    LightsToggle = 0x21e => "LIGHTS_TOGGLE",
    AlsToggle = 0x230 => "ALS_TOGGLE",
    RotateLockToggle = 0x231 => "ROTATE_LOCK_TOGGLE",
    RefreshRateToggle = 0x232 => "REFRESH_RATE_TOGGLE",
    Buttonconfig = 0x240 => "BUTTONCONFIG",
    Taskmanager = 0x241 => "TASKMANAGER",
    Journal = 0x242 => "JOURNAL",
    Controlpanel = 0x243 => "CONTROLPANEL",
    Appselect = 0x244 => "APPSELECT",
    Screensaver = 0x245 => "SCREENSAVER",
    Voicecommand = 0x246 => "VOICECOMMAND",
    Assistant = 0x247 => "ASSISTANT",
    KbdLayoutNext = 0x248 => "KBD_LAYOUT_NEXT",
    EmojiPicker = 0x249 => "EMOJI_PICKER",
    Dictate = 0x24a => "DICTATE",
    CameraAccessEnable = 0x24b => "CAMERA_ACCESS_ENABLE",
    CameraAccessDisable = 0x24c => "CAMERA_ACCESS_DISABLE",
    CameraAccessToggle = 0x24d => "CAMERA_ACCESS_TOGGLE",
    Accessibility = 0x24e => "ACCESSIBILITY",
    DoNotDisturb = 0x24f => "DO_NOT_DISTURB",
    BrightnessMin = 0x250 => "BRIGHTNESS_MIN",
    BrightnessMax = 0x251 => "BRIGHTNESS_MAX",
    KbdinputassistPrev = 0x260 => "KBDINPUTASSIST_PREV",
    KbdinputassistNext = 0x261 => "KBDINPUTASSIST_NEXT",
    KbdinputassistPrevgroup = 0x262 => "KBDINPUTASSIST_PREVGROUP",
    KbdinputassistNextgroup = 0x263 => "KBDINPUTASSIST_NEXTGROUP",
    KbdinputassistAccept = 0x264 => "KBDINPUTASSIST_ACCEPT",
    KbdinputassistCancel = 0x265 => "KBDINPUTASSIST_CANCEL",
    RightUp = 0x266 => "RIGHT_UP",
    RightDown = 0x267 => "RIGHT_DOWN",
    LeftUp = 0x268 => "LEFT_UP",
    LeftDown = 0x269 => "LEFT_DOWN",
    RootMenu = 0x26a => "ROOT_MENU",
    MediaTopMenu = 0x26b => "MEDIA_TOP_MENU",
    Numeric11 = 0x26c => "NUMERIC_11",
    Numeric12 = 0x26d => "NUMERIC_12",
    AudioDesc = 0x26e => "AUDIO_DESC",
    Key3dMode = 0x26f => "3D_MODE",
    NextFavorite = 0x270 => "NEXT_FAVORITE",
    StopRecord = 0x271 => "STOP_RECORD",
    PauseRecord = 0x272 => "PAUSE_RECORD",
    Vod = 0x273 => "VOD",
    Unmute = 0x274 => "UNMUTE",
    Fastreverse = 0x275 => "FASTREVERSE",
    Slowreverse = 0x276 => "SLOWREVERSE",
    Data = 0x277 => "DATA",
    OnscreenKeyboard = 0x278 => "ONSCREEN_KEYBOARD",
    PrivacyScreenToggle = 0x279 => "PRIVACY_SCREEN_TOGGLE",
    SelectiveScreenshot = 0x27a => "SELECTIVE_SCREENSHOT",
    NextElement = 0x27b => "NEXT_ELEMENT",
    PreviousElement = 0x27c => "PREVIOUS_ELEMENT",
    AutopilotEngageToggle = 0x27d => "AUTOPILOT_ENGAGE_TOGGLE",
    MarkWaypoint = 0x27e => "MARK_WAYPOINT",
    Sos = 0x27f => "SOS",
    NavChart = 0x280 => "NAV_CHART",
    FishingChart = 0x281 => "FISHING_CHART",
    SingleRangeRadar = 0x282 => "SINGLE_RANGE_RADAR",
    DualRangeRadar = 0x283 => "DUAL_RANGE_RADAR",
    RadarOverlay = 0x284 => "RADAR_OVERLAY",
    TraditionalSonar = 0x285 => "TRADITIONAL_SONAR",
    ClearvuSonar = 0x286 => "CLEARVU_SONAR",
    SidevuSonar = 0x287 => "SIDEVU_SONAR",
    NavInfo = 0x288 => "NAV_INFO",
    BrightnessMenu = 0x289 => "BRIGHTNESS_MENU",
    Macro1 = 0x290 => "MACRO1",
    Macro2 = 0x291 => "MACRO2",
    Macro3 = 0x292 => "MACRO3",
    Macro4 = 0x293 => "MACRO4",
    Macro5 = 0x294 => "MACRO5",
    Macro6 = 0x295 => "MACRO6",
    Macro7 = 0x296 => "MACRO7",
    Macro8 = 0x297 => "MACRO8",
    Macro9 = 0x298 => "MACRO9",
    Macro10 = 0x299 => "MACRO10",
    Macro11 = 0x29a => "MACRO11",
    Macro12 = 0x29b => "MACRO12",
    Macro13 = 0x29c => "MACRO13",
    Macro14 = 0x29d => "MACRO14",
    Macro15 = 0x29e => "MACRO15",
    Macro16 = 0x29f => "MACRO16",
    Macro17 = 0x2a0 => "MACRO17",
    Macro18 = 0x2a1 => "MACRO18",
    Macro19 = 0x2a2 => "MACRO19",
    Macro20 = 0x2a3 => "MACRO20",
    Macro21 = 0x2a4 => "MACRO21",
    Macro22 = 0x2a5 => "MACRO22",
    Macro23 = 0x2a6 => "MACRO23",
    Macro24 = 0x2a7 => "MACRO24",
    Macro25 = 0x2a8 => "MACRO25",
    Macro26 = 0x2a9 => "MACRO26",
    Macro27 = 0x2aa => "MACRO27",
    Macro28 = 0x2ab => "MACRO28",
    Macro29 = 0x2ac => "MACRO29",
    Macro30 = 0x2ad => "MACRO30",
    MacroRecordStart = 0x2b0 => "MACRO_RECORD_START",
    MacroRecordStop = 0x2b1 => "MACRO_RECORD_STOP",
    MacroPresetCycle = 0x2b2 => "MACRO_PRESET_CYCLE",
    MacroPreset1 = 0x2b3 => "MACRO_PRESET1",
    MacroPreset2 = 0x2b4 => "MACRO_PRESET2",
    MacroPreset3 = 0x2b5 => "MACRO_PRESET3",
    KbdLcdMenu1 = 0x2b8 => "KBD_LCD_MENU1",
    KbdLcdMenu2 = 0x2b9 => "KBD_LCD_MENU2",
    KbdLcdMenu3 = 0x2ba => "KBD_LCD_MENU3",
    KbdLcdMenu4 = 0x2bb => "KBD_LCD_MENU4",
    KbdLcdMenu5 = 0x2bc => "KBD_LCD_MENU5",
}

impl KeyCode {
    /// Whether this is one of the two shift keys.
    pub fn is_shift(&self) -> bool {
        matches!(self, KeyCode::LeftShift | KeyCode::RightShift)
    }

    /// Whether this is the main or the keypad enter key.
    pub fn is_enter(&self) -> bool {
        matches!(self, KeyCode::Enter | KeyCode::KpEnter)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_strip_the_kernel_prefix() {
        assert_eq!(KeyCode::A.name(), "A");
        assert_eq!(KeyCode::Key1.name(), "1");
        assert_eq!(KeyCode::KpEnter.name(), "KPENTER");
        assert_eq!(KeyCode::Key102nd.name(), "102ND");
    }

    #[test]
    fn converts_from_raw_codes() {
        assert_eq!(KeyCode::try_from(30).unwrap(), KeyCode::A);
        assert_eq!(KeyCode::try_from(58).unwrap(), KeyCode::CapsLock);
        assert_eq!(KeyCode::try_from(96).unwrap(), KeyCode::KpEnter);
        assert_eq!(KeyCode::try_from(194).unwrap(), KeyCode::F24);
        assert_eq!(KeyCode::LeftShift as u16, 42);
    }

    #[test]
    fn catalogues_media_and_extended_keys() {
        assert_eq!(KeyCode::try_from(152).unwrap().name(), "SCREENLOCK");
        assert_eq!(KeyCode::try_from(179).unwrap().name(), "KPLEFTPAREN");
        assert_eq!(KeyCode::try_from(182).unwrap().name(), "REDO");
        assert_eq!(KeyCode::try_from(248).unwrap().name(), "MICMUTE");
        assert_eq!(KeyCode::try_from(0x160).unwrap().name(), "OK");
        assert_eq!(KeyCode::try_from(0x1d0).unwrap(), KeyCode::Fn);
        assert_eq!(KeyCode::try_from(0x26f).unwrap().name(), "3D_MODE");
        assert_eq!(KeyCode::try_from(0x2bc).unwrap(), KeyCode::KbdLcdMenu5);
    }

    #[test]
    fn rejects_unknown_codes() {
        assert!(matches!(
            KeyCode::try_from(84),
            Err(KeystreamError::UnknownKeyCode(84))
        ));
        assert!(matches!(
            KeyCode::try_from(0x110),
            Err(KeystreamError::UnknownKeyCode(0x110))
        ));
        // Gaps between key ranges stay unknown.
        assert!(KeyCode::try_from(195).is_err());
        assert!(KeyCode::try_from(0x1bb).is_err());
        assert!(KeyCode::try_from(0x2ff).is_err());
    }

    #[test]
    fn classifies_modifier_and_enter_keys() {
        assert!(KeyCode::LeftShift.is_shift());
        assert!(KeyCode::RightShift.is_shift());
        assert!(!KeyCode::CapsLock.is_shift());
        assert!(KeyCode::Enter.is_enter());
        assert!(KeyCode::KpEnter.is_enter());
        assert!(!KeyCode::LineFeed.is_enter());
    }
}
