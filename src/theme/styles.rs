//! Global CSS styles for Everwish.
//!
//! One stylesheet injected at the app root. The palette lives in CSS
//! custom properties so [`theme_css`] can override it from the stored
//! theme without touching any rule.

use everwish_core::ThemeColors;

/// Override block generated from the stored theme. Rendered after
/// [`GLOBAL_STYLES`] so its custom properties win.
pub fn theme_css(theme: &ThemeColors) -> String {
    format!(
        r#":root {{
  --primary: {primary};
  --accent: {accent};
  --background: {background};
  --foreground: {foreground};
  --card: {card};
  --border: {border};
}}"#,
        primary = theme.primary,
        accent = theme.accent,
        background = theme.background,
        foreground = theme.foreground,
        card = theme.card,
        border = theme.border,
    )
}

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Palette (overridden by the stored theme) */
  --primary: #f56e88;
  --accent: #f5b3c2;
  --background: #f9f8f6;
  --foreground: #4a4540;
  --card: #ffffff;
  --border: #efd9de;

  /* Derived */
  --muted: rgba(74, 69, 64, 0.6);
  --primary-glow: rgba(245, 110, 136, 0.35);
  --danger: #d64545;
  --success: #5a9a6f;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Avenir Next', 'Segoe UI', sans-serif;

  /* Type Scale */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
  --text-xl: 1.75rem;
  --text-2xl: 2.5rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-gentle: 600ms cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--background);
  color: var(--foreground);
  line-height: 1.7;
  min-height: 100vh;
}

h1, h2, h3 {
  font-family: var(--font-serif);
  font-weight: 500;
  color: var(--primary);
}

.muted {
  color: var(--muted);
  font-size: var(--text-sm);
}

/* === Page Shells === */
.entry, .surprise, .admin {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 2rem;
}

.admin {
  justify-content: flex-start;
  overflow-y: auto;
}

/* === Cards === */
.card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: 20px;
  padding: 2.5rem;
  box-shadow: 0 12px 40px rgba(0, 0, 0, 0.07);
  max-width: 640px;
  width: 100%;
  text-align: center;
}

.entry-card, .gate-card {
  max-width: 480px;
}

.admin-form, .admin-login {
  text-align: left;
  max-width: 720px;
}

.entry-title, .gate-title, .greeting-title {
  font-size: var(--text-2xl);
  margin-bottom: 0.5rem;
}

.entry-subtitle, .gate-subtitle {
  margin-bottom: 1.5rem;
}

.gate-prompt {
  margin: 1.5rem 0 0.75rem;
  font-size: var(--text-lg);
}

/* === Inputs === */
.input {
  width: 100%;
  padding: 0.7rem 1rem;
  font-family: var(--font-sans);
  font-size: var(--text-base);
  color: var(--foreground);
  background: var(--background);
  border: 1px solid var(--border);
  border-radius: 10px;
  outline: none;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input:focus {
  border-color: var(--primary);
  box-shadow: 0 0 0 3px var(--primary-glow);
}

.gate-input {
  text-align: center;
  font-size: var(--text-lg);
  margin-bottom: 1rem;
}

.textarea {
  min-height: 8rem;
  resize: vertical;
  line-height: 1.6;
}

/* === Buttons === */
.btn {
  font-family: var(--font-sans);
  font-size: var(--text-base);
  padding: 0.7rem 1.8rem;
  border: none;
  border-radius: 999px;
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.btn:hover:not(:disabled) {
  transform: translateY(-1px);
  box-shadow: 0 6px 18px var(--primary-glow);
}

.btn:disabled {
  opacity: 0.5;
  cursor: default;
}

.btn-primary {
  background: var(--primary);
  color: var(--card);
}

.btn-secondary {
  background: var(--card);
  color: var(--primary);
  border: 1px solid var(--border);
}

.btn-danger {
  background: var(--card);
  color: var(--danger);
  border: 1px solid var(--border);
}

.btn-enter, .btn-celebrate {
  font-size: var(--text-lg);
  padding: 0.9rem 2.5rem;
}

.btn-wide {
  width: 100%;
  margin-top: 1.5rem;
  font-size: var(--text-lg);
}

/* === Countdown === */
.countdown {
  margin: 1rem 0;
}

.countdown-label {
  font-size: var(--text-sm);
  color: var(--muted);
  letter-spacing: 0.1em;
  text-transform: uppercase;
  margin-bottom: 0.75rem;
}

.countdown-digits {
  display: flex;
  justify-content: center;
  gap: 1rem;
}

.countdown-unit {
  display: flex;
  flex-direction: column;
  align-items: center;
  min-width: 4rem;
  padding: 0.75rem 0.5rem;
  background: var(--background);
  border: 1px solid var(--border);
  border-radius: 12px;
}

.countdown-value {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  color: var(--primary);
  font-variant-numeric: tabular-nums;
}

.countdown-unit-label {
  font-size: var(--text-sm);
  color: var(--muted);
}

.countdown-done .countdown-digits {
  opacity: 0.4;
}

/* === Greeting === */
.greeting {
  position: relative;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 3rem 2rem;
  background-size: cover;
  background-position: center;
  overflow: hidden;
}

.greeting-content {
  position: relative;
  z-index: 2;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.5rem;
  width: 100%;
}

.greeting-card {
  max-width: 560px;
}

.greeting-footer {
  position: relative;
  z-index: 2;
  margin-top: 2rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
}

/* === Markdown letter body === */
.markdown-body {
  text-align: center;
  font-size: var(--text-lg);
  line-height: 1.9;
}

.markdown-body p {
  margin-bottom: 1rem;
}

.markdown-body em {
  color: var(--primary);
}

.markdown-body h1, .markdown-body h2, .markdown-body h3 {
  margin: 1rem 0 0.5rem;
}

/* === Photo Carousel === */
.carousel {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.carousel-photo {
  max-width: 420px;
  max-height: 300px;
  border-radius: 16px;
  border: 4px solid var(--card);
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.15);
  object-fit: cover;
}

.carousel-nav {
  background: var(--card);
  border: 1px solid var(--border);
  color: var(--primary);
  border-radius: 50%;
  width: 2.5rem;
  height: 2.5rem;
  font-size: var(--text-lg);
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.carousel-nav:hover {
  transform: scale(1.1);
}

/* === Decorations === */
.decoration-layer {
  position: absolute;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
  z-index: 1;
}

.balloon {
  position: absolute;
  bottom: -120px;
  width: 56px;
  height: 72px;
  border-radius: 50% 50% 48% 48%;
  opacity: 0.85;
  animation: balloon-rise 9s linear infinite;
}

.balloon::after {
  content: '';
  position: absolute;
  top: 100%;
  left: 50%;
  width: 1px;
  height: 48px;
  background: rgba(74, 69, 64, 0.3);
}

@keyframes balloon-rise {
  0%   { transform: translateY(0) rotate(-2deg); }
  50%  { transform: translateY(-55vh) rotate(3deg); }
  100% { transform: translateY(-115vh) rotate(-2deg); }
}

.firework {
  position: absolute;
  width: 6px;
  height: 6px;
  border-radius: 50%;
  animation: firework-burst 1.8s ease-out infinite;
}

@keyframes firework-burst {
  0%   { box-shadow: 0 0 0 0 var(--primary); opacity: 1; transform: scale(0.3); }
  60%  { box-shadow: 0 0 0 28px transparent; opacity: 0.8; transform: scale(1.4); }
  100% { box-shadow: 0 0 0 44px transparent; opacity: 0; transform: scale(1); }
}

.sparkle {
  position: absolute;
  width: 8px;
  height: 8px;
  background: var(--accent);
  clip-path: polygon(50% 0%, 61% 39%, 100% 50%, 61% 61%, 50% 100%, 39% 61%, 0% 50%, 39% 39%);
  animation: sparkle-twinkle 2.4s ease-in-out infinite;
}

@keyframes sparkle-twinkle {
  0%, 100% { opacity: 0; transform: scale(0.4) rotate(0deg); }
  50%      { opacity: 1; transform: scale(1.1) rotate(45deg); }
}

/* === Cake === */
.cake {
  position: relative;
  width: 120px;
  height: 90px;
  margin-top: 0.5rem;
}

.cake-base {
  position: absolute;
  bottom: 0;
  width: 120px;
  height: 44px;
  background: var(--primary);
  border-radius: 8px 8px 12px 12px;
}

.cake-top {
  position: absolute;
  bottom: 40px;
  left: 15px;
  width: 90px;
  height: 30px;
  background: var(--accent);
  border-radius: 8px 8px 4px 4px;
}

.cake-candle {
  position: absolute;
  bottom: 68px;
  left: 56px;
  width: 8px;
  height: 22px;
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: 3px;
}

.cake-candle::before {
  content: '';
  position: absolute;
  top: -12px;
  left: 1px;
  width: 6px;
  height: 10px;
  background: #f2c14e;
  border-radius: 50% 50% 30% 30%;
  animation: flame-flicker 0.5s ease-in-out infinite alternate;
}

@keyframes flame-flicker {
  from { transform: scaleY(1); opacity: 1; }
  to   { transform: scaleY(1.25); opacity: 0.85; }
}

.cake-text {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  color: var(--primary);
}

/* === Admin Form === */
.admin-form section {
  margin: 2rem 0;
  padding-top: 1.5rem;
  border-top: 1px solid var(--border);
}

.admin-form h3 {
  margin-bottom: 0.75rem;
}

.form-field {
  display: block;
  margin-bottom: 1rem;
  flex: 1;
}

.form-label {
  display: block;
  font-size: var(--text-sm);
  color: var(--muted);
  margin-bottom: 0.3rem;
}

.form-row {
  display: flex;
  gap: 1rem;
  align-items: flex-end;
}

.form-row .btn {
  margin-bottom: 1rem;
}

.checkboxes {
  align-items: center;
  margin-bottom: 0.5rem;
}

.checkbox-field {
  display: flex;
  align-items: center;
  gap: 0.4rem;
  font-size: var(--text-sm);
  cursor: pointer;
}

.color-field input[type="color"] {
  width: 100%;
  height: 2.4rem;
  border: 1px solid var(--border);
  border-radius: 8px;
  background: var(--card);
  cursor: pointer;
}

.letter-editor {
  border: 1px solid var(--border);
  border-radius: 14px;
  padding: 1.25rem;
  margin-bottom: 1.25rem;
  background: var(--background);
}

.form-error {
  color: var(--danger);
  margin-top: 1rem;
}

.form-success {
  color: var(--success);
  margin-top: 1rem;
}
"#;
