pub static BACKGROUND_HELP: &str = "Background color removed when encoding

Given as RRGGBB or RRGGBBAA hex digits, with an optional leading #.
Pixels matching this color exactly are left out of the color payload.

A fully transparent background (the default) instead drops every pixel
whose alpha is zero, whatever its color.";

pub static LEVEL_HELP: &str = "Deflate compression level used when encoding

Range is between 0 and 9. 0 stores the stream uncompressed,
9 compresses hardest and is the default";

pub static STENCIL_HELP: &str = "Also write the activity mask when decoding

The mask is written next to the output as <name>_stencil.png,
active pixels white and background pixels black";

pub static AFTER_HELP: &str = "Inputs ending in .apf are decoded to PNG, anything else is read as PNG and encoded to APF.

Examples:
    apf -i sprite.png                     writes sprite.apf
    apf -i sprite.apf --stencil           writes sprite.png and sprite_stencil.png
    apf -i logo.png --background ffffff   drops white pixels";
