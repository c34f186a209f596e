/*!
# Introductory Tutorial for Pocket

Run the executable with no arguments to get the interactive prompt. The
prompt shows the name of the current instance. Type CTRL-D to exit.
<pre><code>&nbsp;pocket1> █
</code></pre>

Every line you enter is evaluated right away. Let's print something.
<pre><code>&nbsp;pocket1> print "Hello World"
&nbsp;Hello World
</code></pre>

Pocket has exactly one kind of value: a 64-bit signed integer. Quoted
strings exist only so they can be handed to functions like `print`.
Variables are declared with `var` and changed by assignment.
<pre><code>&nbsp;pocket1> var a = 5
&nbsp;pocket1> a = a * 2 + 1
&nbsp;pocket1> print a
&nbsp;11
</code></pre>

Blocks are written between braces. The prompt keeps reading while a brace
is open and shows `|` for the continuation lines.
<pre><code>&nbsp;pocket1> func square(x) {
&nbsp;| return x * x
&nbsp;| }
&nbsp;pocket1> print square(12)
&nbsp;144
</code></pre>

Loops use `while`. The condition is evaluated again before each pass.
<pre><code>&nbsp;pocket1> var i = 0
&nbsp;pocket1> while i < 3 {print i; i = i + 1}
&nbsp;0
&nbsp;1
&nbsp;2
</code></pre>

Scripts live in files and are given on the command line, or loaded from
the prompt with `source "file.pk"`. Several independent instances can be
kept side by side with the dot-commands `.new`, `.use`, `.list` and `.quit`.

Errors name what went wrong and where:
<pre><code>&nbsp;pocket1> print b
&nbsp;UNKNOWN SYMBOL IN LINE 1 AT "b"
</code></pre>
*/
