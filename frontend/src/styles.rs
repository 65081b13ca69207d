/// Page-wide theme, shared utility classes and the scroll reveal transitions.
/// Section specific rules live next to each section.
pub const BASE_CSS: &str = r#"
    :root {
        --background: #0b0f17;
        --foreground: #f1f5f9;
        --muted: #1a2130;
        --muted-foreground: #94a3b8;
        --primary: #1d9bf0;
        --primary-foreground: #ffffff;
        --accent: #4d7ce6;
        --border: rgba(148, 163, 184, 0.15);
        --glow: rgba(29, 155, 240, 0.3);
    }
    :root[data-theme="light"] {
        --background: #f8fafc;
        --foreground: #0f172a;
        --muted: #e2e8f0;
        --muted-foreground: #475569;
        --border: rgba(15, 23, 42, 0.12);
        --glow: rgba(29, 155, 240, 0.2);
    }
    html {
        scroll-behavior: auto;
    }
    body {
        margin: 0;
        background: var(--background);
        color: var(--foreground);
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
    }
    .landing-page {
        min-height: 100vh;
        overflow-x: hidden;
    }
    .container {
        max-width: 1280px;
        margin: 0 auto;
        padding: 0 1.5rem;
        position: relative;
        z-index: 1;
    }
    .section-header {
        text-align: center;
        max-width: 48rem;
        margin: 0 auto 5rem;
    }
    .section-eyebrow {
        display: block;
        color: var(--primary);
        font-weight: 600;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        font-size: 0.875rem;
        margin-bottom: 1rem;
    }
    .section-title {
        font-size: 3.5rem;
        font-weight: 700;
        line-height: 1.1;
        margin: 0 0 1.5rem;
    }
    .section-lead {
        font-size: 1.25rem;
        color: var(--muted-foreground);
    }
    .gradient-text {
        background: linear-gradient(45deg, var(--primary), var(--accent));
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .glass-card {
        background: rgba(255, 255, 255, 0.03);
        border: 1px solid var(--border);
        backdrop-filter: blur(16px);
        border-radius: 1.5rem;
    }
    .icon-tile {
        width: 3.5rem;
        height: 3.5rem;
        border-radius: 1rem;
        display: flex;
        align-items: center;
        justify-content: center;
        color: var(--primary-foreground);
        font-size: 1.4rem;
        flex-shrink: 0;
    }
    .btn {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        border: none;
        border-radius: 0.75rem;
        padding: 0.85rem 1.75rem;
        font-size: 1rem;
        font-weight: 600;
        cursor: pointer;
        text-decoration: none;
        transition: transform 0.3s ease, box-shadow 0.3s ease, background 0.3s ease;
    }
    .btn-hero {
        background: linear-gradient(135deg, var(--primary), var(--accent));
        color: var(--primary-foreground);
    }
    .btn-hero:hover {
        box-shadow: 0 0 30px var(--glow);
        transform: translateY(-2px);
    }
    .btn-glass {
        background: rgba(255, 255, 255, 0.06);
        color: var(--foreground);
        border: 1px solid var(--border);
    }
    .btn-ghost {
        background: transparent;
        color: var(--foreground);
    }
    .btn-outline {
        background: transparent;
        color: var(--primary);
        border: 1px solid var(--primary);
    }
    .btn-xl {
        padding: 1.1rem 2.25rem;
        font-size: 1.1rem;
    }
    .btn-block {
        width: 100%;
    }
    .floating-tile {
        position: absolute;
        border: 1px solid var(--primary);
        border-radius: 1rem;
        pointer-events: none;
    }
    .animate-float {
        animation: float 6s ease-in-out infinite;
    }
    @keyframes float {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-20px); }
    }
    .page-transition {
        animation: page-in 0.8s ease-out both;
    }
    @keyframes page-in {
        from { opacity: 0; }
        to { opacity: 1; }
    }

    .scroll-animate,
    .scroll-animate-scale,
    .scroll-animate-left,
    .scroll-animate-right {
        opacity: 0;
        transition: opacity 0.8s cubic-bezier(0.25, 0.46, 0.45, 0.94),
                    transform 0.8s cubic-bezier(0.25, 0.46, 0.45, 0.94);
        will-change: opacity, transform;
    }
    .scroll-animate { transform: translateY(40px); }
    .scroll-animate-scale { transform: scale(0.92); }
    .scroll-animate-left { transform: translateX(-60px); }
    .scroll-animate-right { transform: translateX(60px); }
    .scroll-animate.animate-in,
    .scroll-animate-scale.animate-in,
    .scroll-animate-left.animate-in,
    .scroll-animate-right.animate-in {
        opacity: 1;
        transform: none;
    }
    .stagger-1 { transition-delay: 0.1s; }
    .stagger-2 { transition-delay: 0.2s; }
    .stagger-3 { transition-delay: 0.3s; }
    .stagger-4 { transition-delay: 0.4s; }
    .stagger-5 { transition-delay: 0.5s; }
    .stagger-6 { transition-delay: 0.6s; }

    /* Direction-biased entrances set their offset inline; this animates it. */
    .motion {
        transition-property: opacity, transform;
        transition-timing-function: cubic-bezier(0.25, 0.46, 0.45, 0.94);
    }

    @media (prefers-reduced-motion: reduce) {
        .scroll-animate,
        .scroll-animate-scale,
        .scroll-animate-left,
        .scroll-animate-right,
        .motion {
            transition: none;
            transform: none;
            opacity: 1;
        }
    }
    @media (max-width: 768px) {
        .section-title {
            font-size: 2.25rem;
        }
        .section-header {
            margin-bottom: 3rem;
        }
    }
"#;
