//! CSS for the hero section.
//!
//! Theme variables, the grain overlay, layout classes and every keyframe
//! used by the hero. Per-kernel timing is passed through inline custom
//! properties (`--rot`, `--period`, `--delay`), so one set of keyframes
//! serves all layers.

/// Seconds the page waits before starting the headline entrance.
pub const LOAD_DELAY_SECS: f64 = 0.2;

/// Stagger between consecutive kernel animations, in seconds.
pub const KERNEL_STAGGER_SECS: f64 = 0.06;

/// Complete stylesheet for the hero.
pub const HERO_CSS: &str = r#"
:root {
    --primary: #FF6B00;
    --secondary: #D4A5A5;
    --background: #FFF8E6;
    --text: #1A1A1A;
    --shadow: rgba(0,0,0,0.1);
}

* { box-sizing: border-box; }
body { margin: 0; background: var(--background); color: var(--text); }

.grain::before {
    content: '';
    position: absolute; inset: 0; pointer-events: none; opacity: 0.06;
    background-image: radial-gradient(#000 1px, transparent 1px);
    background-size: 3px 3px; mix-blend-mode: multiply;
}

.hero {
    position: relative; width: 100%; min-height: 100vh;
    display: flex; flex-direction: column; justify-content: center; align-items: center;
    overflow: hidden; background: var(--background);
}

/* Alive background */
.hero-bg { position: absolute; inset: 0; z-index: -20; }
.hero-blob { position: absolute; border-radius: 9999px; filter: blur(64px); }
.hero-blob-rose {
    top: -224px; left: -224px; width: 520px; height: 520px;
    background: radial-gradient(50% 50% at 50% 50%, var(--secondary) 0%, transparent 70%);
    animation: blob-pulse 16s ease-in-out infinite;
}
.hero-blob-orange {
    top: 128px; right: -180px; width: 640px; height: 640px;
    background: radial-gradient(50% 50% at 50% 50%, color-mix(in oklab, var(--primary) 40%, transparent) 0%, transparent 70%);
    animation: blob-sway 22s ease-in-out infinite;
}
.hero-blob-blend {
    bottom: 64px; left: 24px; width: 420px; height: 420px;
    background: radial-gradient(50% 50% at 50% 50%, color-mix(in oklab, var(--primary) 25%, var(--secondary) 50%) 0%, transparent 70%);
    animation: blob-drift 24s ease-in-out infinite;
}
.hero-dots {
    position: absolute; inset: 0; opacity: 0.1;
    background-image: radial-gradient(circle at 1px 1px, var(--secondary) 1px, transparent 1.2px);
    background-size: 26px 26px;
    animation: dots-pan 30s linear infinite;
}

@keyframes blob-pulse {
    0%, 100% { transform: scale(1); opacity: 0.28; }
    50% { transform: scale(1.08); opacity: 0.36; }
}
@keyframes blob-sway {
    0%, 100% { transform: rotate(0deg); opacity: 0.25; }
    33% { transform: rotate(20deg); opacity: 0.33; }
    66% { transform: rotate(-20deg); opacity: 0.29; }
}
@keyframes blob-drift {
    0%, 100% { transform: translate(0, 0); opacity: 0.18; }
    33% { transform: translate(16px, -10px); opacity: 0.26; }
    66% { transform: translate(-10px, 8px); opacity: 0.22; }
}
@keyframes dots-pan {
    0%, 100% { background-position: 0 0; }
    50% { background-position: 26px -26px; }
}

/* Kernels */
.kernel {
    position: absolute; user-select: none; height: auto;
    rotate: var(--rot); opacity: 0;
    animation:
        kernel-in 1s ease-out var(--delay) forwards,
        kernel-bob var(--period) ease-in-out var(--delay) infinite,
        kernel-wobble var(--period) ease-in-out var(--delay) infinite;
}
.kernel-fg { filter: drop-shadow(0 6px 12px var(--shadow)); }

@keyframes kernel-in {
    from { opacity: 0; scale: 0.9; }
    to { opacity: 1; scale: 1; }
}
@keyframes kernel-bob {
    0%, 100% { translate: 0 0; }
    50% { translate: 0 -20px; }
}
@keyframes kernel-wobble {
    0%, 100% { rotate: var(--rot); }
    33% { rotate: calc(var(--rot) + 12deg); }
    66% { rotate: calc(var(--rot) - 12deg); }
}

/* Center content */
.hero-content {
    z-index: 30; text-align: center; display: flex; flex-direction: column;
    align-items: center; padding: 0 24px; margin-top: -14vh;
}
.fade-in-up { opacity: 0; animation: fade-in-up 1s ease-out forwards; }
@keyframes fade-in-up {
    from { opacity: 0; transform: translateY(40px); }
    to { opacity: 1; transform: translateY(0); }
}
.hero-tagline {
    font-family: 'Cormorant Garamond', serif; font-style: italic;
    letter-spacing: 0.28em; margin: 0 0 12px;
    font-size: clamp(16px, 1.8vw, 24px); color: #DEA193;
}
.hero-title {
    font-family: 'Cormorant Garamond', serif; font-weight: 700;
    letter-spacing: 0.5px; line-height: 1.15; margin: 0 0 16px;
    font-size: clamp(40px, 6vw, 84px); color: #773d22;
}
.hero-title-accent { font-style: italic; color: var(--primary); }
.hero-description {
    font-family: Comfortaa, sans-serif; max-width: 42rem; margin: 0 0 32px;
    font-size: clamp(16px, 2vw, 20px); color: #959393;
}
.hero-actions { display: flex; justify-content: center; }
.btn-primary {
    font-family: Comfortaa, sans-serif; font-weight: 500; color: #fff;
    padding: 16px 48px; border-radius: 9999px; text-decoration: none;
    background: var(--primary); text-align: center;
    box-shadow: 6px 6px 12px rgba(0,0,0,0.12), -6px -6px 12px rgba(255,255,255,0.6);
    transition: transform 0.2s ease, box-shadow 0.2s ease, filter 0.2s ease;
}
.btn-primary:hover { transform: scale(1.05); box-shadow: 0 0 20px var(--primary); }
.btn-primary:active { transform: scale(0.97); filter: brightness(0.95); }

/* Bowl */
.hero-bowl {
    position: absolute; bottom: -26%; width: 100%; display: flex;
    justify-content: center; pointer-events: none; z-index: 20;
    opacity: 0; animation: bowl-rise 1.2s ease-out 0.6s forwards;
}
.hero-bowl img { width: 46%; filter: drop-shadow(0 24px 40px var(--shadow)); }
@keyframes bowl-rise {
    from { opacity: 0; transform: translateY(120px) scale(0.95); }
    to { opacity: 1; transform: translateY(0) scale(1); }
}

/* Bulk order card */
.bulk-card {
    position: fixed; bottom: 10%; right: 24px; z-index: 40;
    padding: 16px 20px; border-radius: 16px;
    background: rgba(255,255,255,0.35); border: 1px solid rgba(255,255,255,0.5);
    backdrop-filter: blur(24px); box-shadow: 0 8px 30px rgba(0,0,0,0.08);
    font-family: Comfortaa, sans-serif; color: var(--text);
    opacity: 0; animation: card-in 1s ease 0.9s forwards;
}
.bulk-card-row { display: flex; align-items: center; gap: 12px; }
.bulk-card-icon { color: var(--primary); font-size: 20px; }
.bulk-card p { margin: 0; line-height: 1.25; }
.bulk-card-title { font-weight: 600; }
.bulk-card-subtitle { font-size: 14px; opacity: 0.8; }
@keyframes card-in {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}

/* Branding */
.brand-nav {
    position: absolute; top: 0; left: 0; width: 100%; z-index: 40;
    display: flex; align-items: center; padding: 20px 24px;
    opacity: 0; animation: nav-in 0.8s ease forwards;
}
.brand-name {
    font-family: Comfortaa, sans-serif; font-size: 24px; font-weight: 700;
    color: var(--primary);
}
@keyframes nav-in {
    from { opacity: 0; transform: translateY(-12px); }
    to { opacity: 1; transform: translateY(0); }
}

@media (min-width: 768px) {
    .hero-description { margin-bottom: 40px; }
    .btn-primary { font-size: 18px; }
    .hero-bowl img { width: 34%; }
    .bulk-card { right: 40px; }
    .brand-nav { padding: 20px 40px; }
}

@media (prefers-reduced-motion: reduce) {
    .kernel, .hero-blob, .hero-dots { animation: none; opacity: 1; }
}
"#;
