//! Framebuffer of styled glyphs, independent of any terminal backend.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Per-glyph styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl GlyphStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// One terminal cell: a character and its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: GlyphStyle,
}

impl Glyph {
    pub const fn new(ch: char, style: GlyphStyle) -> Self {
        Self { ch, style }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::new(' ', GlyphStyle::default())
    }
}

/// Number of decimal digits needed to print `value`.
pub fn digit_count(value: u32) -> u16 {
    value.checked_ilog10().map_or(1, |d| d as u16 + 1)
}

/// Row-major grid of glyphs. Writes outside the bounds are dropped.
#[derive(Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl Clone for FrameBuffer {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            glyphs: self.glyphs.clone(),
        }
    }

    /// Copies into the existing glyph storage; only grows it when `source` is larger.
    fn clone_from(&mut self, source: &Self) {
        self.width = source.width;
        self.height = source.height;
        self.glyphs.clone_from(&source.glyphs);
    }
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when it is large enough.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.glyphs
            .resize(width as usize * height as usize, Glyph::default());
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    #[inline(always)]
    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.offset(x, y).map(|i| self.glyphs[i])
    }

    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.offset(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    pub fn clear(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: GlyphStyle) {
        self.set(x, y, Glyph::new(ch, style));
    }

    /// Write `s` starting at (x, y); returns the number of columns written.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: GlyphStyle) -> u16 {
        let mut written = 0u16;
        for ch in s.chars() {
            let cx = x.saturating_add(written);
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            written += 1;
        }
        written
    }

    /// Write a decimal number without allocating; returns its width.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: GlyphStyle) -> u16 {
        let width = digit_count(value);
        let mut rest = value;
        for i in (0..width).rev() {
            let digit = char::from(b'0' + (rest % 10) as u8);
            self.put_char(x.saturating_add(i), y, digit, style);
            rest /= 10;
        }
        width
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: GlyphStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Characters of row `y` as a string (empty when out of range).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|g| g.ch)
            .collect()
    }
}
