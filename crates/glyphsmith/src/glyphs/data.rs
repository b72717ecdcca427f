//! Raw glyph columns for every substitution table.
//!
//! Each column pairs a run of source characters with a space-separated list
//! of replacement glyphs, one glyph per source character. Only ASCII space
//! separates glyphs, so glyphs such as U+3000 IDEOGRAPHIC SPACE are legal.

/// A run of source characters and their space-separated replacements.
pub(super) type Column = (&'static str, &'static str);

const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";

pub(super) const BOLD: &[Column] = &[
    (UPPER, "𝐀 𝐁 𝐂 𝐃 𝐄 𝐅 𝐆 𝐇 𝐈 𝐉 𝐊 𝐋 𝐌 𝐍 𝐎 𝐏 𝐐 𝐑 𝐒 𝐓 𝐔 𝐕 𝐖 𝐗 𝐘 𝐙"),
    (LOWER, "𝐚 𝐛 𝐜 𝐝 𝐞 𝐟 𝐠 𝐡 𝐢 𝐣 𝐤 𝐥 𝐦 𝐧 𝐨 𝐩 𝐪 𝐫 𝐬 𝐭 𝐮 𝐯 𝐰 𝐱 𝐲 𝐳"),
    (DIGITS, "𝟎 𝟏 𝟐 𝟑 𝟒 𝟓 𝟔 𝟕 𝟖 𝟗"),
];

pub(super) const ITALIC: &[Column] = &[
    (UPPER, "𝐴 𝐵 𝐶 𝐷 𝐸 𝐹 𝐺 𝐻 𝐼 𝐽 𝐾 𝐿 𝑀 𝑁 𝑂 𝑃 𝑄 𝑅 𝑆 𝑇 𝑈 𝑉 𝑊 𝑋 𝑌 𝑍"),
    (LOWER, "𝑎 𝑏 𝑐 𝑑 𝑒 𝑓 𝑔 ℎ 𝑖 𝑗 𝑘 𝑙 𝑚 𝑛 𝑜 𝑝 𝑞 𝑟 𝑠 𝑡 𝑢 𝑣 𝑤 𝑥 𝑦 𝑧"),
];

pub(super) const BOLD_ITALIC: &[Column] = &[
    (UPPER, "𝑨 𝑩 𝑪 𝑫 𝑬 𝑭 𝑮 𝑯 𝑰 𝑱 𝑲 𝑳 𝑴 𝑵 𝑶 𝑷 𝑸 𝑹 𝑺 𝑻 𝑼 𝑽 𝑾 𝑿 𝒀 𝒁"),
    (LOWER, "𝒂 𝒃 𝒄 𝒅 𝒆 𝒇 𝒈 𝒉 𝒊 𝒋 𝒌 𝒍 𝒎 𝒏 𝒐 𝒑 𝒒 𝒓 𝒔 𝒕 𝒖 𝒗 𝒘 𝒙 𝒚 𝒛"),
];

pub(super) const GOTHIC: &[Column] = &[
    (UPPER, "𝔄 𝔅 ℭ 𝔇 𝔈 𝔉 𝔊 ℌ ℑ 𝔍 𝔎 𝔏 𝔐 𝔑 𝔒 𝔓 𝔔 ℜ 𝔖 𝔗 𝔘 𝔙 𝔚 𝔛 𝔜 ℨ"),
    (LOWER, "𝔞 𝔟 𝔠 𝔡 𝔢 𝔣 𝔤 𝔥 𝔦 𝔧 𝔨 𝔩 𝔪 𝔫 𝔬 𝔭 𝔮 𝔯 𝔰 𝔱 𝔲 𝔳 𝔴 𝔵 𝔶 𝔷"),
];

pub(super) const BUBBLE: &[Column] = &[
    (UPPER, "Ⓐ Ⓑ Ⓒ Ⓓ Ⓔ Ⓕ Ⓖ Ⓗ Ⓘ Ⓙ Ⓚ Ⓛ Ⓜ Ⓝ Ⓞ Ⓟ Ⓠ Ⓡ Ⓢ Ⓣ Ⓤ Ⓥ Ⓦ Ⓧ Ⓨ Ⓩ"),
    (LOWER, "ⓐ ⓑ ⓒ ⓓ ⓔ ⓕ ⓖ ⓗ ⓘ ⓙ ⓚ ⓛ ⓜ ⓝ ⓞ ⓟ ⓠ ⓡ ⓢ ⓣ ⓤ ⓥ ⓦ ⓧ ⓨ ⓩ"),
    (DIGITS, "⓪ ① ② ③ ④ ⑤ ⑥ ⑦ ⑧ ⑨"),
];

pub(super) const DARK_BUBBLE: &[Column] = &[
    (UPPER, "🅐 🅑 🅒 🅓 🅔 🅕 🅖 🅗 🅘 🅙 🅚 🅛 🅜 🅝 🅞 🅟 🅠 🅡 🅢 🅣 🅤 🅥 🅦 🅧 🅨 🅩"),
    (LOWER, "🅐 🅑 🅒 🅓 🅔 🅕 🅖 🅗 🅘 🅙 🅚 🅛 🅜 🅝 🅞 🅟 🅠 🅡 🅢 🅣 🅤 🅥 🅦 🅧 🅨 🅩"),
];

pub(super) const SQUARE: &[Column] = &[
    (UPPER, "🅰 🅱 🅲 🅳 🅴 🅵 🅶 🅷 🅸 🅹 🅺 🅻 🅼 🅽 🅾 🅿 🆀 🆁 🆂 🆃 🆄 🆅 🆆 🆇 🆈 🆉"),
    (LOWER, "🅰 🅱 🅲 🅳 🅴 🅵 🅶 🅷 🅸 🅹 🅺 🅻 🅼 🅽 🅾 🅿 🆀 🆁 🆂 🆃 🆄 🆅 🆆 🆇 🆈 🆉"),
];

pub(super) const PARENTHESIZED: &[Column] = &[
    (UPPER, "⒜ ⒝ ⒞ ⒟ ⒠ ⒡ ⒢ ⒣ ⒤ ⒥ ⒦ ⒧ ⒨ ⒩ ⒪ ⒫ ⒬ ⒭ ⒮ ⒯ ⒰ ⒱ ⒲ ⒳ ⒴ ⒵"),
    (LOWER, "⒜ ⒝ ⒞ ⒟ ⒠ ⒡ ⒢ ⒣ ⒤ ⒥ ⒦ ⒧ ⒨ ⒩ ⒪ ⒫ ⒬ ⒭ ⒮ ⒯ ⒰ ⒱ ⒲ ⒳ ⒴ ⒵"),
];

pub(super) const SMALL_CAPS: &[Column] = &[
    (UPPER, "ᴀ ʙ ᴄ ᴅ ᴇ ғ ɢ ʜ ɪ ᴊ ᴋ ʟ ᴍ ɴ ᴏ ᴘ ǫ ʀ s ᴛ ᴜ ᴠ ᴡ x ʏ ᴢ"),
    (LOWER, "ᴀ ʙ ᴄ ᴅ ᴇ ғ ɢ ʜ ɪ ᴊ ᴋ ʟ ᴍ ɴ ᴏ ᴘ ǫ ʀ s ᴛ ᴜ ᴠ ᴡ x ʏ ᴢ"),
];

pub(super) const DOUBLE_STRUCK: &[Column] = &[
    (UPPER, "𝔸 𝔹 ℂ 𝔻 𝔼 𝔽 𝔾 ℍ 𝕀 𝕁 𝕂 𝕃 𝕄 ℕ 𝕆 ℙ ℚ ℝ 𝕊 𝕋 𝕌 𝕍 𝕎 𝕏 𝕐 ℤ"),
    (LOWER, "𝕒 𝕓 𝕔 𝕕 𝕖 𝕗 𝕘 𝕙 𝕚 𝕛 𝕜 𝕝 𝕞 𝕟 𝕠 𝕡 𝕢 𝕣 𝕤 𝕥 𝕦 𝕧 𝕨 𝕩 𝕪 𝕫"),
    (DIGITS, "𝟘 𝟙 𝟚 𝟛 𝟜 𝟝 𝟞 𝟟 𝟠 𝟡"),
];

pub(super) const FULLWIDTH: &[Column] = &[
    (UPPER, "Ａ Ｂ Ｃ Ｄ Ｅ Ｆ Ｇ Ｈ Ｉ Ｊ Ｋ Ｌ Ｍ Ｎ Ｏ Ｐ Ｑ Ｒ Ｓ Ｔ Ｕ Ｖ Ｗ Ｘ Ｙ Ｚ"),
    (LOWER, "ａ ｂ ｃ ｄ ｅ ｆ ｇ ｈ ｉ ｊ ｋ ｌ ｍ ｎ ｏ ｐ ｑ ｒ ｓ ｔ ｕ ｖ ｗ ｘ ｙ ｚ"),
    (DIGITS, "０ １ ２ ３ ４ ５ ６ ７ ８ ９"),
    (" !?.,:;", "　 ！ ？ ． ， ： ；"),
];

pub(super) const REVERSED: &[Column] = &[
    (UPPER, "∀ ᗺ Ɔ ᗡ Ǝ ᖴ פ H I ſ K ˥ W N O Ԁ Q ᴿ S ┴ ∩ Λ M X ⅄ Z"),
    (LOWER, "ɐ q ɔ p ǝ ɟ ƃ ɥ ᴉ ɾ ʞ l ɯ u o d b ɹ s ʇ n ʌ ʍ x ʎ z"),
];

pub(super) const SUPERSCRIPT: &[Column] = &[
    (UPPER, "ᴬ ᴮ ᶜ ᴰ ᴱ ᶠ ᴳ ᴴ ᴵ ᴶ ᴷ ᴸ ᴹ ᴺ ᴼ ᴾ ᵠ ᴿ ˢ ᵀ ᵁ ⱽ ᵂ ˣ ʸ ᶻ"),
    (LOWER, "ᵃ ᵇ ᶜ ᵈ ᵉ ᶠ ᵍ ʰ ⁱ ʲ ᵏ ˡ ᵐ ⁿ ᵒ ᵖ ᵠ ʳ ˢ ᵗ ᵘ ᵛ ʷ ˣ ʸ ᶻ"),
    (DIGITS, "⁰ ¹ ² ³ ⁴ ⁵ ⁶ ⁷ ⁸ ⁹"),
    ("+-=()", "⁺ ⁻ ⁼ ⁽ ⁾"),
];

pub(super) const SUBSCRIPT: &[Column] = &[
    (UPPER, "ₐ B C D ₑ F G ₕ ᵢ ⱼ ₖ ₗ ₘ ₙ ₒ ₚ Q ᵣ ₛ ₜ ᵤ ᵥ W ₓ Y Z"),
    (LOWER, "ₐ b c d ₑ f g ₕ ᵢ ⱼ ₖ ₗ ₘ ₙ ₒ ₚ q ᵣ ₛ ₜ ᵤ ᵥ w ₓ y z"),
    (DIGITS, "₀ ₁ ₂ ₃ ₄ ₅ ₆ ₇ ₈ ₉"),
    ("+-=()", "₊ ₋ ₌ ₍ ₎"),
];

pub(super) const BOLD_GOTHIC: &[Column] = &[
    (UPPER, "𝕬 𝕭 𝕮 𝕯 𝕰 𝕱 𝕲 𝕳 𝕴 𝕵 𝕶 𝕷 𝕸 𝕹 𝕺 𝕻 𝕼 𝕽 𝕾 𝕿 𝖀 𝖁 𝖂 𝖃 𝖄 𝖅"),
    (LOWER, "𝖆 𝖇 𝖈 𝖉 𝖊 𝖋 𝖌 𝖍 𝖎 𝖏 𝖐 𝖑 𝖒 𝖓 𝖔 𝖕 𝖖 𝖗 𝖘 𝖙 𝖚 𝖛 𝖜 𝖝 𝖞 𝖟"),
];

pub(super) const SCRIPT: &[Column] = &[
    (UPPER, "𝒜 ℬ 𝒞 𝒟 ℰ ℱ 𝒢 ℋ ℐ 𝒥 𝒦 ℒ ℳ 𝒩 𝒪 𝒫 𝒬 ℛ 𝒮 𝒯 𝒰 𝒱 𝒲 𝒳 𝒴 𝒵"),
    (LOWER, "𝒶 𝒷 𝒸 𝒹 ℯ 𝒻 ℊ 𝒽 𝒾 𝒿 𝓀 𝓁 𝓂 𝓃 ℴ 𝓅 𝓆 𝓇 𝓈 𝓉 𝓊 𝓋 𝓌 𝓍 𝓎 𝓏"),
];

pub(super) const BOLD_SCRIPT: &[Column] = &[
    (UPPER, "𝓐 𝓑 𝓒 𝓓 𝓔 𝓕 𝓖 𝓗 𝓘 𝓙 𝓚 𝓛 𝓜 𝓝 𝓞 𝓟 𝓠 𝓡 𝓢 𝓣 𝓤 𝓥 𝓦 𝓧 𝓨 𝓩"),
    (LOWER, "𝓪 𝓫 𝓬 𝓭 𝓮 𝓯 𝓰 𝓱 𝓲 𝓳 𝓴 𝓵 𝓶 𝓷 𝓸 𝓹 𝓺 𝓻 𝓼 𝓽 𝓾 𝓿 𝔀 𝔁 𝔂 𝔃"),
];

pub(super) const MONOSPACE: &[Column] = &[
    (UPPER, "𝙰 𝙱 𝙲 𝙳 𝙴 𝙵 𝙶 𝙷 𝙸 𝙹 𝙺 𝙻 𝙼 𝙽 𝙾 𝙿 𝚀 𝚁 𝚂 𝚃 𝚄 𝚅 𝚆 𝚇 𝚈 𝚉"),
    (LOWER, "𝚊 𝚋 𝚌 𝚍 𝚎 𝚏 𝚐 𝚑 𝚒 𝚓 𝚔 𝚕 𝚖 𝚗 𝚘 𝚙 𝚚 𝚛 𝚜 𝚝 𝚞 𝚟 𝚠 𝚡 𝚢 𝚣"),
    (DIGITS, "𝟶 𝟷 𝟸 𝟹 𝟺 𝟻 𝟼 𝟽 𝟾 𝟿"),
];

pub(super) const SANS_SERIF_BOLD: &[Column] = &[
    (UPPER, "𝖠 𝖡 𝖢 𝖣 𝖤 𝖥 𝖦 𝖧 𝖨 𝖩 𝖪 𝖫 𝖬 𝖭 𝖮 𝖯 𝖰 𝖱 𝖲 𝖳 𝖴 𝖵 𝖶 𝖷 𝖸 𝖹"),
    (LOWER, "𝖺 𝖻 𝖼 𝖽 𝖾 𝖿 𝗀 𝗁 𝗂 𝗃 𝗄 𝗅 𝗆 𝗇 𝗈 𝗉 𝗊 𝗋 𝗌 𝗍 𝗎 𝗏 𝗐 𝗑 𝗒 𝗓"),
    (DIGITS, "𝟢 𝟣 𝟤 𝟥 𝟦 𝟧 𝟨 𝟩 𝟪 𝟫"),
];

pub(super) const SANS_SERIF_BOLD_ITALIC: &[Column] = &[
    (UPPER, "𝗔 𝗕 𝗖 𝗗 𝗘 𝗙 𝗚 𝗛 𝗜 𝗝 𝗞 𝗟 𝗠 𝗡 𝗢 𝗣 𝗤 𝗥 𝗦 𝗧 𝗨 𝗩 𝗪 𝗫 𝗬 𝗭"),
    (LOWER, "𝗮 𝗯 𝗰 𝗱 𝗲 𝗳 𝗴 𝗵 𝗶 𝗷 𝗸 𝗹 𝗺 𝗻 𝗼 𝗽 𝗾 𝗿 𝘀 𝘁 𝘂 𝘃 𝘄 𝘅 𝘆 𝘇"),
    (DIGITS, "𝟬 𝟭 𝟮 𝟯 𝟰 𝟱 𝟲 𝟳 𝟴 𝟵"),
];

pub(super) const SANS_SERIF_ITALIC: &[Column] = &[
    (UPPER, "𝘈 𝘉 𝘊 𝘋 𝘌 𝘍 𝘎 𝘏 𝘐 𝘑 𝘒 𝘓 𝘔 𝘕 𝘖 𝘗 𝘘 𝘙 𝘚 𝘛 𝘜 𝘝 𝘞 𝘟 𝘠 𝘡"),
    (LOWER, "𝘢 𝘣 𝘤 𝘥 𝘦 𝘧 𝘨 𝘩 𝘪 𝘫 𝘬 𝘭 𝘮 𝘯 𝘰 𝘱 𝘲 𝘳 𝘴 𝘵 𝘶 𝘷 𝘸 𝘹 𝘺 𝘻"),
];

pub(super) const SANS_SERIF_BOLD_ITALIC_2: &[Column] = &[
    (UPPER, "𝘼 𝘽 𝘾 𝘿 𝙀 𝙁 𝙂 𝙃 𝙄 𝙅 𝙆 𝙇 𝙈 𝙉 𝙊 𝙋 𝙌 𝙍 𝙎 𝙏 𝙐 𝙑 𝙒 𝙓 𝙔 𝙕"),
    (LOWER, "𝙖 𝙗 𝙘 𝙙 𝙚 𝙛 𝙜 𝙝 𝙞 𝙟 𝙠 𝙡 𝙢 𝙣 𝙤 𝙥 𝙦 𝙧 𝙨 𝙩 𝙪 𝙫 𝙬 𝙭 𝙮 𝙯"),
];

// GREEK, ROUNDED, VINTAGE and SMALL reuse the upper-case glyph for lower case
// wherever the source block has no distinct lower-case form.
pub(super) const GREEK: &[Column] = &[
    (UPPER, "α в ¢ ∂ є ƒ g н ι נ к l м η σ ρ q я s т υ ν ω χ y z"),
    (LOWER, "α в ¢ ∂ є ƒ g н ι נ к l м η σ ρ q я s т υ ν ω χ y z"),
];

pub(super) const ROUNDED: &[Column] = &[
    (UPPER, "ᗩ ᗷ ᑕ ᗪ E ᖴ G ᕼ I ᒍ K ᒪ ᗰ ᑎ O ᑭ ᑫ ᖇ ᔕ T ᑌ ᐯ ᗯ ᙭ Y ᘔ"),
    (LOWER, "ᗩ ᗷ ᑕ ᗪ e ᖴ g ᕼ i ᒍ k ᒪ ᗰ ᑎ o ᑭ ᑫ ᖇ ᔕ t ᑌ ᐯ ᗯ ᙭ y ᘔ"),
];

pub(super) const VINTAGE: &[Column] = &[
    (UPPER, "Ꭺ Ᏼ Ꮯ Ꭰ Ꭼ Ꮀ Ꮆ Ꮋ Ꭵ Ꮑ Ꮶ Ꮮ Ꮇ Ꮑ Ꮎ Ꮲ Ꭴ Ꮢ Ꮥ Ꭲ Ꮼ Ꮙ Ꮗ Ꭱ Ꭹ Ꮓ"),
    (LOWER, "Ꭺ Ᏼ Ꮯ Ꭰ Ꭼ Ꮀ Ꮆ Ꮋ Ꭵ Ꮑ Ꮶ Ꮮ Ꮇ Ꮑ Ꮎ Ꮲ Ꭴ Ꮢ Ꮥ Ꭲ Ꮼ Ꮙ Ꮗ Ꭱ Ꭹ Ꮓ"),
];

pub(super) const SMALL: &[Column] = &[
    (UPPER, "ᵃ ᵇ ᶜ ᵈ ᵉ ᶠ ᵍ ʰ ᵢ ʲ ᵏ ˡ ᵐ ⁿ ᵒ ᵖ ᵠ ʳ ˢ ᵗ ᵘ ᵛ ʷ ˣ ʸ ᶻ"),
    (LOWER, "ᵃ ᵇ ᶜ ᵈ ᵉ ᶠ ᵍ ʰ ᵢ ʲ ᵏ ˡ ᵐ ⁿ ᵒ ᵖ ᵠ ʳ ˢ ᵗ ᵘ ᵛ ʷ ˣ ʸ ᶻ"),
];

// Substitutions applied after reversal. MIRROR and UPSIDE_DOWN differ from
// FLIP in a handful of letters only.
pub(super) const FLIP: &[Column] = &[
    (UPPER, "∀ ᗺ Ɔ ᗡ Ǝ Ⅎ פ H I ſ K ˥ W N O Ԁ Q ᴿ S Ʇ ∩ Λ M X ⅄ Z"),
    (LOWER, "ɐ q ɔ p ǝ ɟ ƃ ɥ ᴉ ɾ ʞ l ɯ u o d b ɹ s ʇ n ʌ ʍ x ʎ z"),
];

pub(super) const MIRROR: &[Column] = &[
    (UPPER, "A ᗺ Ɔ ᗡ Ǝ Ⅎ פ H I ſ K ˥ W N O Ԁ Q ɿ S Ʇ ∩ Λ M X ⅄ Z"),
    (LOWER, "ɐ q ɔ p ǝ ɟ ƃ ɥ ᴉ ɾ ʞ l ɯ u o d b ɹ s ʇ n ʌ ʍ x ʎ z"),
];

pub(super) const UPSIDE_DOWN: &[Column] = &[
    (UPPER, "∀ ᗺ Ɔ ᗡ Ǝ ᖴ פ H I ſ K ˥ W Ո O Ԁ Q ᴿ S ┴ ∩ Λ M X ⅄ Z"),
    (LOWER, "ɐ q ɔ p ǝ ɟ ƃ ɥ ᴉ ɾ ʞ l ɯ u o d b ɹ s ʇ n ʌ ʍ x ʎ z"),
];
