/// Static LaTeX preamble: packages, page layout, column types, and the
/// checkbox/event-day macros used by the calendar and table emitters.
/// Takes no schedule-specific input.
pub fn latex_header() -> Vec<String> {
    PREAMBLE.iter().map(|line| line.to_string()).collect()
}

const PREAMBLE: &[&str] = &[
    r"\documentclass[landscape,a4paper,10pt]{article}",
    r"\usepackage[utf8]{inputenc}",
    r"\usepackage[margin=1.5cm]{geometry}",
    r"\usepackage{longtable}",
    r"\usepackage{array}",
    r"\usepackage{booktabs}",
    r"\usepackage{enumitem}",
    r"\usepackage[T1]{fontenc}",
    r"\usepackage{hyperref}",
    r"\usepackage{pifont}",
    r"\usepackage{tikz}",
    r"\usetikzlibrary{calendar,shapes.geometric}",
    "",
    r"% Configure hyperref",
    r"\hypersetup{",
    r"    colorlinks=false,",
    r"    pdfborder={0 0 0}",
    r"}",
    "",
    r"% Remove page numbers",
    r"\pagestyle{empty}",
    "",
    r"% Adjust spacing",
    r"\setlength{\parindent}{0pt}",
    r"\setlength{\parskip}{0pt}",
    "",
    r"% Add extra row spacing for tables",
    r"\renewcommand{\arraystretch}{1.5}",
    "",
    r"% Define column types",
    r"\newcolumntype{L}[1]{>{\raggedright\arraybackslash}p{#1}}",
    r"\newcolumntype{C}[1]{>{\centering\arraybackslash}p{#1}}",
    r"\newcolumntype{M}[1]{>{\centering\arraybackslash}m{#1}}",
    "",
    r"% Define clickable checkboxes with custom symbols",
    r"% Using checkboxsymbol parameter: \ding{51} for checkmark, \ding{55} for cross",
    r"\newcommand{\donebox}{%",
    r"    \makebox[2cm][c]{%",
    r"        \CheckBox[name=done\thedone,width=0.35cm,height=0.35cm,borderwidth=1,bordercolor=0 0 0,checkboxsymbol=\ding{51}]{}%",
    r"        \hspace{0.35cm}%",
    r"        \CheckBox[name=notdone\thedone,width=0.35cm,height=0.35cm,borderwidth=1,bordercolor=0 0 0,checkboxsymbol=\ding{55}]{}%",
    r"    }%",
    r"    \stepcounter{done}%",
    r"}",
    r"\newcounter{done}",
    "",
    r"% Define macro for event day styling",
    r"\newcommand{\eventday}[1]{%",
    r"  if (equals=#1) [nodes={draw=red, circle, very thick, minimum width=1.3em, minimum height=1.3em, inner sep=0pt}]%",
    r"}",
    "",
];
